//! Default department vocabularies.
//!
//! Pattern sources are Turkish regexes matched case-insensitively against
//! the folded item text (see [`crate::policy::text`]).

use crate::policy::rules::RuleTable;

/// Occupational safety and health (İSG).
pub const ISG: RuleTable = RuleTable {
    name: "isg",
    high: &[
        r"\biş\s*sağlığı\b",
        r"\biş\s*güvenliği\b",
        r"\bİSG\b",
        r"\b6331\b",
        r"\brisk\s*değerlendirm(e|esi)\b",
        r"\biş\s*kazası\b",
        r"\bmeslek\s*hastalığı\b",
        r"\biş\s*güvenliği\s*uzmanı\b",
        r"\bişyeri\s*hekimi\b",
        r"\bkişisel\s*koruyucu\b|\bKKD\b",
        r"\bacil\s*durum\b",
        r"\btehlikeli\b|\bçok\s*tehlikeli\b",
    ],
    mid: &[
        r"\bçalışma\b",
        r"\bdenetim\b",
        r"\bidari\s*para\s*cezası\b",
        r"\bteftiş\b",
        r"\beğitim\b",
    ],
};

/// Human resources (İK).
pub const IK: RuleTable = RuleTable {
    name: "ik",
    high: &[
        r"\bçalışma\b",
        r"\bsgk\b",
        r"\bsosyal\s*güvenlik\b",
        r"\bistihdam\b",
        r"\bmesai\b|\bfazla\s*çalışma\b",
        r"\bizin\b|\byıllık\s*izin\b",
        r"\bücret\b|\basgari\s*ücret\b",
        r"\bpersonel\b",
        r"\biş\s*kanunu\b|\b4857\b",
        r"\byabancı\s*çalışma\b|\bçalışma\s*izni\b",
    ],
    mid: &[
        r"\bgenelge\b",
        r"\byönetmelik\b",
        r"\btebliğ\b",
        r"\bkurul\b",
    ],
};

/// Accounting and tax.
pub const MUHASEBE: RuleTable = RuleTable {
    name: "muhasebe",
    high: &[
        r"\bvergi\b",
        r"\bkdv\b|\bkatma\s*değer\b",
        r"\bötv\b",
        r"\bgelir\s*vergisi\b",
        r"\bkurumlar\s*vergisi\b",
        r"\btevkifat\b",
        r"\bmuhasebe\b",
        r"\bdefter\b|\be-defter\b|\be-fatura\b|\be-arşiv\b",
        r"\bvuk\b|\bvergi\s*usul\b",
        r"\bfaiz\b|\bgecikme\s*zammı\b",
        r"\bharç\b",
    ],
    mid: &[
        r"\byönetmelik\b",
        r"\btebliğ\b",
        r"\bcumhurbaşkanı\s*kararı\b",
        r"\bkarar\b",
    ],
};

/// Logistics and customs.
pub const LOJISTIK: RuleTable = RuleTable {
    name: "lojistik",
    high: &[
        r"\bgümrük\b",
        r"\bithalat\b|\bihracat\b",
        r"\bgtip\b",
        r"\blojistik\b",
        r"\btaşımacılık\b|\bnakliye\b",
        r"\btransit\b",
        r"\bdepo\b|\bantrepo\b",
        r"\bliman\b",
        r"\badr\b|\btehlikeli\s*madde\b",
        r"\bmenşe\b",
    ],
    mid: &[r"\byönetmelik\b", r"\btebliğ\b", r"\bkarar\b"],
};

/// Shipped tables, in registry order.
pub const DEFAULT_TABLES: &[RuleTable] = &[ISG, IK, MUHASEBE, LOJISTIK];
