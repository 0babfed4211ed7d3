//! Built-in Dutch locale tables
//!
//! Opaque lookup pools consumed by the generators. The hospital, study and
//! city pools can be replaced through configuration; the name, street and
//! vocabulary tables are fixed.

use crate::config::HospitalGroup;

/// Dutch first names
pub const FIRST_NAMES: &[&str] = &[
    "Daan", "Sem", "Lucas", "Levi", "Finn", "Bram", "Milan", "Jesse", "Thijs", "Lars",
    "Ruben", "Thomas", "Tim", "Koen", "Niels", "Pieter", "Willem", "Jan", "Hendrik", "Gerrit",
    "Emma", "Julia", "Sophie", "Lotte", "Sanne", "Fleur", "Anna", "Eva", "Lisa", "Anouk",
    "Femke", "Iris", "Noor", "Roos", "Maud", "Esmee", "Marieke", "Annelies", "Greetje", "Johanna",
];

/// Dutch last names, without tussenvoegsel
pub const LAST_NAMES: &[&str] = &[
    "Jansen", "Visser", "Smit", "Meijer", "Mulder", "Bakker", "Bos", "Vos", "Peters", "Hendriks",
    "Dekker", "Brouwer", "Dijkstra", "Smits", "Schouten", "Koster", "Willems", "Maas", "Verhoeven",
    "Kok", "Jacobs", "Vermeulen", "Timmermans", "Hoekstra", "Groen", "Kuipers", "Veenstra",
    "Kramer", "Scholten", "Postma", "Evers", "Barendse", "Blom", "Sanders", "Mol", "Kuijpers",
];

/// Tussenvoegsel particles that may precede a last name
pub const PARTICLES: &[&str] = &["van", "de", "van der", "van den", "van de", "ter", "ten", "den"];

/// Street names for address surrogates
pub const STREETS: &[&str] = &[
    "Kerkstraat", "Dorpsstraat", "Molenweg", "Schoolstraat", "Julianastraat", "Beatrixlaan",
    "Wilhelminastraat", "Stationsweg", "Lindelaan", "Beukenlaan", "Industrieweg", "Parallelweg",
    "Hoofdstraat", "Nieuwstraat", "Zandweg", "Esdoornstraat",
];

/// Email provider domains common in the Netherlands
pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "hotmail.com", "outlook.com", "ziggo.nl", "kpnmail.nl", "planet.nl", "xs4all.nl",
];

/// Words composing practice/clinic URLs
pub const URL_PREFIXES: &[&str] = &[
    "huisartsenpraktijk", "zorggroep", "kliniek", "gezondheidscentrum", "fysiotherapie",
    "apotheek",
];

/// Landline area codes (without leading zero)
pub const AREA_CODES: &[&str] = &["10", "13", "20", "24", "30", "38", "40", "50", "70", "88"];

/// Dutch bank codes for IBAN surrogates
pub const BANK_CODES: &[&str] = &["ABNA", "INGB", "RABO", "SNSB", "TRIO", "KNAB", "BUNQ"];

/// Full Dutch month names, January first
pub const MONTHS_FULL: &[&str] = &[
    "januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september",
    "oktober", "november", "december",
];

/// Abbreviated Dutch month names, January first
pub const MONTHS_ABBR: &[&str] = &[
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Hour words for natural time phrases, index 0 = twaalf
pub const HOUR_WORDS: &[&str] = &[
    "twaalf", "één", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen", "tien",
    "elf",
];

/// Default city pool
pub fn default_cities() -> Vec<String> {
    [
        "Amsterdam", "Rotterdam", "Den Haag", "Utrecht", "Eindhoven", "Groningen", "Tilburg",
        "Almere", "Breda", "Nijmegen", "Enschede", "Apeldoorn", "Haarlem", "Arnhem", "Zaandam",
        "Amersfoort", "Den Bosch", "Zwolle", "Leiden", "Maastricht", "Dordrecht", "Ede", "Leeuwarden",
        "Alkmaar", "Delft", "Venlo", "Deventer", "Hilversum", "Heerlen", "Gouda",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Default hospital synonym groups with their city forms
pub fn default_hospital_groups() -> Vec<HospitalGroup> {
    fn group(names: &[&str], city: &str) -> HospitalGroup {
        HospitalGroup {
            names: names.iter().map(|s| s.to_string()).collect(),
            city: city.to_string(),
        }
    }

    vec![
        group(
            &["Sint Elisabeth Ziekenhuis", "St. Elisabeth", "ETZ Elisabeth"],
            "Tilburg",
        ),
        group(
            &["Catharina Ziekenhuis", "het Catharina"],
            "Eindhoven",
        ),
        group(
            &["Diakonessenhuis", "het Diak"],
            "Utrecht",
        ),
        group(
            &["Martini Ziekenhuis", "het Martini"],
            "Groningen",
        ),
        group(
            &["Rijnstate Ziekenhuis", "Rijnstate"],
            "Arnhem",
        ),
        group(
            &["Isala Klinieken", "Isala"],
            "Zwolle",
        ),
        group(
            &["Amphia Ziekenhuis", "het Amphia"],
            "Breda",
        ),
        group(
            &["Medisch Spectrum Twente", "MST"],
            "Enschede",
        ),
        group(
            &["Elkerliek Ziekenhuis", "het Elkerliek"],
            "Helmond",
        ),
        group(
            &["Groene Hart Ziekenhuis", "GHZ"],
            "Gouda",
        ),
    ]
}

/// Default study-name synonym groups
pub fn default_study_groups() -> Vec<Vec<String>> {
    fn group(variants: &[&str]) -> Vec<String> {
        variants.iter().map(|s| s.to_string()).collect()
    }

    vec![
        group(&["HORIZON-III studie", "HORIZON-III", "Horizon 3"]),
        group(&["ZONNEBLOEM studie", "Zonnebloem"]),
        group(&["TULP trial", "TULP"]),
        group(&["POLDER-2 studie", "POLDER-2", "Polder II"]),
        group(&["NOORDZEE cohort", "Noordzee"]),
        group(&["DELTA-PLAN studie", "DELTA-PLAN"]),
        group(&["WINDMOLEN trial", "WINDMOLEN", "Windmolen studie"]),
        group(&["IJSSEL registratie", "IJssel"]),
    ]
}
