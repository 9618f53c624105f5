//! Built-in ISO-3166-1 country table.

use super::country::{Country, CountryLookup};

/// [`CountryLookup`] over the ISO-3166-1 country table.
///
/// Matches, ignoring case and surrounding whitespace, any of:
/// - alpha-2 code (`"us"`)
/// - alpha-3 code (`"USA"`)
/// - numeric code, with or without leading zeros (`"840"`, `"036"`)
/// - English short name (`"United States"`, `"åland islands"`)
///
/// ## Examples
///
/// ```
/// use vaulted_billing_core::{CountryLookup, Iso3166};
///
/// let canada = Iso3166.lookup("can").unwrap();
/// assert_eq!(canada.alpha2, "CA");
/// assert_eq!(canada.numeric, 124);
///
/// assert!(Iso3166.lookup("Nonexistent").is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso3166;

impl Iso3166 {
    /// Every country in the table.
    #[must_use]
    pub fn countries() -> &'static [Country] {
        &COUNTRIES
    }
}

impl CountryLookup for Iso3166 {
    fn lookup(&self, raw: &str) -> Option<Country> {
        let raw = raw.trim();
        let found = match raw.len() {
            0 => None,
            2 => COUNTRIES.iter().find(|c| c.alpha2.eq_ignore_ascii_case(raw)),
            3 if !raw.bytes().all(|b| b.is_ascii_digit()) => {
                COUNTRIES.iter().find(|c| c.alpha3.eq_ignore_ascii_case(raw))
            }
            _ => None,
        };

        found
            .or_else(|| by_numeric(raw))
            .or_else(|| by_name(raw))
            .copied()
    }
}

fn by_name(raw: &str) -> Option<&'static Country> {
    if raw.is_empty() {
        return None;
    }
    let wanted = raw.to_lowercase();
    COUNTRIES.iter().find(|c| c.name.to_lowercase() == wanted)
}

fn by_numeric(raw: &str) -> Option<&'static Country> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let numeric: u16 = raw.parse().ok()?;
    COUNTRIES.iter().find(|c| c.numeric == numeric)
}

const fn country(
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: u16,
    name: &'static str,
) -> Country {
    Country {
        alpha2,
        alpha3,
        numeric,
        name,
    }
}

static COUNTRIES: [Country; 249] = [
    country("AF", "AFG", 4, "Afghanistan"),
    country("AX", "ALA", 248, "Åland Islands"),
    country("AL", "ALB", 8, "Albania"),
    country("DZ", "DZA", 12, "Algeria"),
    country("AS", "ASM", 16, "American Samoa"),
    country("AD", "AND", 20, "Andorra"),
    country("AO", "AGO", 24, "Angola"),
    country("AI", "AIA", 660, "Anguilla"),
    country("AQ", "ATA", 10, "Antarctica"),
    country("AG", "ATG", 28, "Antigua and Barbuda"),
    country("AR", "ARG", 32, "Argentina"),
    country("AM", "ARM", 51, "Armenia"),
    country("AW", "ABW", 533, "Aruba"),
    country("AU", "AUS", 36, "Australia"),
    country("AT", "AUT", 40, "Austria"),
    country("AZ", "AZE", 31, "Azerbaijan"),
    country("BS", "BHS", 44, "Bahamas"),
    country("BH", "BHR", 48, "Bahrain"),
    country("BD", "BGD", 50, "Bangladesh"),
    country("BB", "BRB", 52, "Barbados"),
    country("BY", "BLR", 112, "Belarus"),
    country("BE", "BEL", 56, "Belgium"),
    country("BZ", "BLZ", 84, "Belize"),
    country("BJ", "BEN", 204, "Benin"),
    country("BM", "BMU", 60, "Bermuda"),
    country("BT", "BTN", 64, "Bhutan"),
    country("BO", "BOL", 68, "Bolivia"),
    country("BQ", "BES", 535, "Bonaire, Sint Eustatius and Saba"),
    country("BA", "BIH", 70, "Bosnia and Herzegovina"),
    country("BW", "BWA", 72, "Botswana"),
    country("BV", "BVT", 74, "Bouvet Island"),
    country("BR", "BRA", 76, "Brazil"),
    country("IO", "IOT", 86, "British Indian Ocean Territory"),
    country("BN", "BRN", 96, "Brunei Darussalam"),
    country("BG", "BGR", 100, "Bulgaria"),
    country("BF", "BFA", 854, "Burkina Faso"),
    country("BI", "BDI", 108, "Burundi"),
    country("CV", "CPV", 132, "Cabo Verde"),
    country("KH", "KHM", 116, "Cambodia"),
    country("CM", "CMR", 120, "Cameroon"),
    country("CA", "CAN", 124, "Canada"),
    country("KY", "CYM", 136, "Cayman Islands"),
    country("CF", "CAF", 140, "Central African Republic"),
    country("TD", "TCD", 148, "Chad"),
    country("CL", "CHL", 152, "Chile"),
    country("CN", "CHN", 156, "China"),
    country("CX", "CXR", 162, "Christmas Island"),
    country("CC", "CCK", 166, "Cocos (Keeling) Islands"),
    country("CO", "COL", 170, "Colombia"),
    country("KM", "COM", 174, "Comoros"),
    country("CG", "COG", 178, "Congo"),
    country("CD", "COD", 180, "Congo, Democratic Republic of the"),
    country("CK", "COK", 184, "Cook Islands"),
    country("CR", "CRI", 188, "Costa Rica"),
    country("CI", "CIV", 384, "Côte d'Ivoire"),
    country("HR", "HRV", 191, "Croatia"),
    country("CU", "CUB", 192, "Cuba"),
    country("CW", "CUW", 531, "Curaçao"),
    country("CY", "CYP", 196, "Cyprus"),
    country("CZ", "CZE", 203, "Czechia"),
    country("DK", "DNK", 208, "Denmark"),
    country("DJ", "DJI", 262, "Djibouti"),
    country("DM", "DMA", 212, "Dominica"),
    country("DO", "DOM", 214, "Dominican Republic"),
    country("EC", "ECU", 218, "Ecuador"),
    country("EG", "EGY", 818, "Egypt"),
    country("SV", "SLV", 222, "El Salvador"),
    country("GQ", "GNQ", 226, "Equatorial Guinea"),
    country("ER", "ERI", 232, "Eritrea"),
    country("EE", "EST", 233, "Estonia"),
    country("SZ", "SWZ", 748, "Eswatini"),
    country("ET", "ETH", 231, "Ethiopia"),
    country("FK", "FLK", 238, "Falkland Islands (Malvinas)"),
    country("FO", "FRO", 234, "Faroe Islands"),
    country("FJ", "FJI", 242, "Fiji"),
    country("FI", "FIN", 246, "Finland"),
    country("FR", "FRA", 250, "France"),
    country("GF", "GUF", 254, "French Guiana"),
    country("PF", "PYF", 258, "French Polynesia"),
    country("TF", "ATF", 260, "French Southern Territories"),
    country("GA", "GAB", 266, "Gabon"),
    country("GM", "GMB", 270, "Gambia"),
    country("GE", "GEO", 268, "Georgia"),
    country("DE", "DEU", 276, "Germany"),
    country("GH", "GHA", 288, "Ghana"),
    country("GI", "GIB", 292, "Gibraltar"),
    country("GR", "GRC", 300, "Greece"),
    country("GL", "GRL", 304, "Greenland"),
    country("GD", "GRD", 308, "Grenada"),
    country("GP", "GLP", 312, "Guadeloupe"),
    country("GU", "GUM", 316, "Guam"),
    country("GT", "GTM", 320, "Guatemala"),
    country("GG", "GGY", 831, "Guernsey"),
    country("GN", "GIN", 324, "Guinea"),
    country("GW", "GNB", 624, "Guinea-Bissau"),
    country("GY", "GUY", 328, "Guyana"),
    country("HT", "HTI", 332, "Haiti"),
    country("HM", "HMD", 334, "Heard Island and McDonald Islands"),
    country("VA", "VAT", 336, "Holy See"),
    country("HN", "HND", 340, "Honduras"),
    country("HK", "HKG", 344, "Hong Kong"),
    country("HU", "HUN", 348, "Hungary"),
    country("IS", "ISL", 352, "Iceland"),
    country("IN", "IND", 356, "India"),
    country("ID", "IDN", 360, "Indonesia"),
    country("IR", "IRN", 364, "Iran"),
    country("IQ", "IRQ", 368, "Iraq"),
    country("IE", "IRL", 372, "Ireland"),
    country("IM", "IMN", 833, "Isle of Man"),
    country("IL", "ISR", 376, "Israel"),
    country("IT", "ITA", 380, "Italy"),
    country("JM", "JAM", 388, "Jamaica"),
    country("JP", "JPN", 392, "Japan"),
    country("JE", "JEY", 832, "Jersey"),
    country("JO", "JOR", 400, "Jordan"),
    country("KZ", "KAZ", 398, "Kazakhstan"),
    country("KE", "KEN", 404, "Kenya"),
    country("KI", "KIR", 296, "Kiribati"),
    country("KP", "PRK", 408, "Korea, Democratic People's Republic of"),
    country("KR", "KOR", 410, "Korea, Republic of"),
    country("KW", "KWT", 414, "Kuwait"),
    country("KG", "KGZ", 417, "Kyrgyzstan"),
    country("LA", "LAO", 418, "Lao People's Democratic Republic"),
    country("LV", "LVA", 428, "Latvia"),
    country("LB", "LBN", 422, "Lebanon"),
    country("LS", "LSO", 426, "Lesotho"),
    country("LR", "LBR", 430, "Liberia"),
    country("LY", "LBY", 434, "Libya"),
    country("LI", "LIE", 438, "Liechtenstein"),
    country("LT", "LTU", 440, "Lithuania"),
    country("LU", "LUX", 442, "Luxembourg"),
    country("MO", "MAC", 446, "Macao"),
    country("MG", "MDG", 450, "Madagascar"),
    country("MW", "MWI", 454, "Malawi"),
    country("MY", "MYS", 458, "Malaysia"),
    country("MV", "MDV", 462, "Maldives"),
    country("ML", "MLI", 466, "Mali"),
    country("MT", "MLT", 470, "Malta"),
    country("MH", "MHL", 584, "Marshall Islands"),
    country("MQ", "MTQ", 474, "Martinique"),
    country("MR", "MRT", 478, "Mauritania"),
    country("MU", "MUS", 480, "Mauritius"),
    country("YT", "MYT", 175, "Mayotte"),
    country("MX", "MEX", 484, "Mexico"),
    country("FM", "FSM", 583, "Micronesia"),
    country("MD", "MDA", 498, "Moldova"),
    country("MC", "MCO", 492, "Monaco"),
    country("MN", "MNG", 496, "Mongolia"),
    country("ME", "MNE", 499, "Montenegro"),
    country("MS", "MSR", 500, "Montserrat"),
    country("MA", "MAR", 504, "Morocco"),
    country("MZ", "MOZ", 508, "Mozambique"),
    country("MM", "MMR", 104, "Myanmar"),
    country("NA", "NAM", 516, "Namibia"),
    country("NR", "NRU", 520, "Nauru"),
    country("NP", "NPL", 524, "Nepal"),
    country("NL", "NLD", 528, "Netherlands"),
    country("NC", "NCL", 540, "New Caledonia"),
    country("NZ", "NZL", 554, "New Zealand"),
    country("NI", "NIC", 558, "Nicaragua"),
    country("NE", "NER", 562, "Niger"),
    country("NG", "NGA", 566, "Nigeria"),
    country("NU", "NIU", 570, "Niue"),
    country("NF", "NFK", 574, "Norfolk Island"),
    country("MK", "MKD", 807, "North Macedonia"),
    country("MP", "MNP", 580, "Northern Mariana Islands"),
    country("NO", "NOR", 578, "Norway"),
    country("OM", "OMN", 512, "Oman"),
    country("PK", "PAK", 586, "Pakistan"),
    country("PW", "PLW", 585, "Palau"),
    country("PS", "PSE", 275, "Palestine, State of"),
    country("PA", "PAN", 591, "Panama"),
    country("PG", "PNG", 598, "Papua New Guinea"),
    country("PY", "PRY", 600, "Paraguay"),
    country("PE", "PER", 604, "Peru"),
    country("PH", "PHL", 608, "Philippines"),
    country("PN", "PCN", 612, "Pitcairn"),
    country("PL", "POL", 616, "Poland"),
    country("PT", "PRT", 620, "Portugal"),
    country("PR", "PRI", 630, "Puerto Rico"),
    country("QA", "QAT", 634, "Qatar"),
    country("RE", "REU", 638, "Réunion"),
    country("RO", "ROU", 642, "Romania"),
    country("RU", "RUS", 643, "Russian Federation"),
    country("RW", "RWA", 646, "Rwanda"),
    country("BL", "BLM", 652, "Saint Barthélemy"),
    country("SH", "SHN", 654, "Saint Helena, Ascension and Tristan da Cunha"),
    country("KN", "KNA", 659, "Saint Kitts and Nevis"),
    country("LC", "LCA", 662, "Saint Lucia"),
    country("MF", "MAF", 663, "Saint Martin (French part)"),
    country("PM", "SPM", 666, "Saint Pierre and Miquelon"),
    country("VC", "VCT", 670, "Saint Vincent and the Grenadines"),
    country("WS", "WSM", 882, "Samoa"),
    country("SM", "SMR", 674, "San Marino"),
    country("ST", "STP", 678, "Sao Tome and Principe"),
    country("SA", "SAU", 682, "Saudi Arabia"),
    country("SN", "SEN", 686, "Senegal"),
    country("RS", "SRB", 688, "Serbia"),
    country("SC", "SYC", 690, "Seychelles"),
    country("SL", "SLE", 694, "Sierra Leone"),
    country("SG", "SGP", 702, "Singapore"),
    country("SX", "SXM", 534, "Sint Maarten (Dutch part)"),
    country("SK", "SVK", 703, "Slovakia"),
    country("SI", "SVN", 705, "Slovenia"),
    country("SB", "SLB", 90, "Solomon Islands"),
    country("SO", "SOM", 706, "Somalia"),
    country("ZA", "ZAF", 710, "South Africa"),
    country("GS", "SGS", 239, "South Georgia and the South Sandwich Islands"),
    country("SS", "SSD", 728, "South Sudan"),
    country("ES", "ESP", 724, "Spain"),
    country("LK", "LKA", 144, "Sri Lanka"),
    country("SD", "SDN", 729, "Sudan"),
    country("SR", "SUR", 740, "Suriname"),
    country("SJ", "SJM", 744, "Svalbard and Jan Mayen"),
    country("SE", "SWE", 752, "Sweden"),
    country("CH", "CHE", 756, "Switzerland"),
    country("SY", "SYR", 760, "Syrian Arab Republic"),
    country("TW", "TWN", 158, "Taiwan"),
    country("TJ", "TJK", 762, "Tajikistan"),
    country("TZ", "TZA", 834, "Tanzania, United Republic of"),
    country("TH", "THA", 764, "Thailand"),
    country("TL", "TLS", 626, "Timor-Leste"),
    country("TG", "TGO", 768, "Togo"),
    country("TK", "TKL", 772, "Tokelau"),
    country("TO", "TON", 776, "Tonga"),
    country("TT", "TTO", 780, "Trinidad and Tobago"),
    country("TN", "TUN", 788, "Tunisia"),
    country("TR", "TUR", 792, "Türkiye"),
    country("TM", "TKM", 795, "Turkmenistan"),
    country("TC", "TCA", 796, "Turks and Caicos Islands"),
    country("TV", "TUV", 798, "Tuvalu"),
    country("UG", "UGA", 800, "Uganda"),
    country("UA", "UKR", 804, "Ukraine"),
    country("AE", "ARE", 784, "United Arab Emirates"),
    country("GB", "GBR", 826, "United Kingdom"),
    country("US", "USA", 840, "United States"),
    country("UM", "UMI", 581, "United States Minor Outlying Islands"),
    country("UY", "URY", 858, "Uruguay"),
    country("UZ", "UZB", 860, "Uzbekistan"),
    country("VU", "VUT", 548, "Vanuatu"),
    country("VE", "VEN", 862, "Venezuela"),
    country("VN", "VNM", 704, "Viet Nam"),
    country("VG", "VGB", 92, "Virgin Islands (British)"),
    country("VI", "VIR", 850, "Virgin Islands (U.S.)"),
    country("WF", "WLF", 876, "Wallis and Futuna"),
    country("EH", "ESH", 732, "Western Sahara"),
    country("YE", "YEM", 887, "Yemen"),
    country("ZM", "ZMB", 894, "Zambia"),
    country("ZW", "ZWE", 716, "Zimbabwe"),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_lookup_alpha2() {
        let us = Iso3166.lookup("US").unwrap();
        assert_eq!(us.alpha3, "USA");
        assert_eq!(us.numeric, 840);
        assert_eq!(Iso3166.lookup("us"), Some(us));
    }

    #[test]
    fn test_lookup_alpha3() {
        assert_eq!(Iso3166.lookup("CAN").unwrap().alpha2, "CA");
        assert_eq!(Iso3166.lookup("mex").unwrap().alpha2, "MX");
    }

    #[test]
    fn test_lookup_numeric() {
        assert_eq!(Iso3166.lookup("840").unwrap().alpha2, "US");
        assert_eq!(Iso3166.lookup("036").unwrap().alpha2, "AU");
        assert_eq!(Iso3166.lookup("36").unwrap().alpha2, "AU");
        assert_eq!(Iso3166.lookup("4").unwrap().alpha2, "AF");
        assert!(Iso3166.lookup("999").is_none());
    }

    #[test]
    fn test_lookup_name() {
        assert_eq!(Iso3166.lookup("United Kingdom").unwrap().alpha2, "GB");
        assert_eq!(Iso3166.lookup("  germany ").unwrap().alpha2, "DE");
    }

    #[test]
    fn test_lookup_name_ignores_non_ascii_case() {
        assert_eq!(Iso3166.lookup("Åland Islands").unwrap().alpha2, "AX");
        assert_eq!(Iso3166.lookup("åland islands").unwrap().alpha2, "AX");
        assert_eq!(Iso3166.lookup("TÜRKIYE").unwrap().alpha2, "TR");
        assert_eq!(Iso3166.lookup("CÔTE D'IVOIRE").unwrap().alpha2, "CI");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(Iso3166.lookup("").is_none());
        assert!(Iso3166.lookup("   ").is_none());
        assert!(Iso3166.lookup("Nonexistent").is_none());
        assert!(Iso3166.lookup("XX").is_none());
        assert!(Iso3166.lookup("ZZZ").is_none());
    }

    #[test]
    fn test_table_codes_are_unique() {
        let countries = Iso3166::countries();
        let alpha2: HashSet<_> = countries.iter().map(|c| c.alpha2).collect();
        let alpha3: HashSet<_> = countries.iter().map(|c| c.alpha3).collect();
        let numeric: HashSet<_> = countries.iter().map(|c| c.numeric).collect();
        assert_eq!(alpha2.len(), countries.len());
        assert_eq!(alpha3.len(), countries.len());
        assert_eq!(numeric.len(), countries.len());
    }

    #[test]
    fn test_table_code_shapes() {
        for c in Iso3166::countries() {
            assert_eq!(c.alpha2.len(), 2, "{}", c.name);
            assert_eq!(c.alpha3.len(), 3, "{}", c.name);
            assert!(c.alpha2.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.name);
            assert!(c.alpha3.bytes().all(|b| b.is_ascii_uppercase()), "{}", c.name);
            assert!((1..=999).contains(&c.numeric), "{}", c.name);
        }
    }

    #[test]
    fn test_every_code_resolves_to_itself() {
        for c in Iso3166::countries() {
            assert_eq!(Iso3166.lookup(c.alpha2), Some(*c));
            assert_eq!(Iso3166.lookup(c.alpha3), Some(*c));
            assert_eq!(Iso3166.lookup(&c.numeric.to_string()), Some(*c));
        }
    }
}
