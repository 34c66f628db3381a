//! Enumerated option sets shared by the typed model and the schema.

/// Declare a string-valued enum with its wire names, an `ALL` list and a
/// `VALUES` list usable directly as schema options.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $( #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Wire names of every variant, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Wire name of this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            /// Look up a variant by wire name.
            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $value => Some($name::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum! {
    /// Highest academic degree of an education entry.
    pub enum Degree {
        MiddleSchool => "Middle School",
        HighSchool => "High School",
        Diploma => "Diploma",
        Associate => "Associate",
        Bachelor => "Bachelor",
        Master => "Master",
        Doctor => "Doctor",
    }
}

option_enum! {
    /// Language proficiency, following the ILR scale.
    pub enum Fluency {
        Elementary => "Elementary Proficiency",
        LimitedWorking => "Limited Working Proficiency",
        MinimumProfessional => "Minimum Professional Proficiency",
        FullProfessional => "Full Professional Proficiency",
        Native => "Native or Bilingual Proficiency",
    }
}

option_enum! {
    /// Skill mastery level.
    pub enum SkillLevel {
        Novice => "Novice",
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
        Expert => "Expert",
        Master => "Master",
    }
}

option_enum! {
    /// Social network of a profile entry.
    pub enum Network {
        Behance => "Behance",
        Dribbble => "Dribbble",
        Facebook => "Facebook",
        GitHub => "GitHub",
        Gitlab => "Gitlab",
        Instagram => "Instagram",
        Line => "Line",
        LinkedIn => "LinkedIn",
        Medium => "Medium",
        Pinterest => "Pinterest",
        Reddit => "Reddit",
        Snapchat => "Snapchat",
        StackOverflow => "Stack Overflow",
        Telegram => "Telegram",
        TikTok => "TikTok",
        Twitch => "Twitch",
        Twitter => "Twitter",
        Vimeo => "Vimeo",
        Weibo => "Weibo",
        WeChat => "WeChat",
        WhatsApp => "WhatsApp",
        YouTube => "YouTube",
        Zhihu => "Zhihu",
    }
}

option_enum! {
    /// Output language of a layout.
    pub enum Locale {
        English => "en",
        SimplifiedChinese => "zh-hans",
        TraditionalChineseHongKong => "zh-hant-hk",
        TraditionalChineseTaiwan => "zh-hant-tw",
        Spanish => "es",
        French => "fr",
        Norwegian => "no",
        Japanese => "ja",
        German => "de",
        Indonesian => "id",
    }
}

option_enum! {
    /// Renderer family of a layout.
    pub enum Engine {
        Latex => "latex",
        Html => "html",
        Markdown => "markdown",
    }
}

option_enum! {
    /// Visual template of a layout. Each template belongs to one engine.
    pub enum Template {
        ModerncvBanking => "moderncv-banking",
        ModerncvCasual => "moderncv-casual",
        ModerncvClassic => "moderncv-classic",
        Calm => "calm",
        Minimal => "minimal",
    }
}

option_enum! {
    /// Base font size of LaTeX output.
    pub enum FontSize {
        Small => "10pt",
        Medium => "11pt",
        Large => "12pt",
    }
}

option_enum! {
    /// Number style passed to fontspec.
    pub enum FontspecNumbers {
        Auto => "Auto",
        Lining => "Lining",
        OldStyle => "OldStyle",
    }
}

option_enum! {
    /// A resume section.
    pub enum Section {
        Basics => "basics",
        Location => "location",
        Profiles => "profiles",
        Summary => "summary",
        Education => "education",
        Work => "work",
        Languages => "languages",
        Skills => "skills",
        Awards => "awards",
        Certificates => "certificates",
        Publications => "publications",
        References => "references",
        Projects => "projects",
        Interests => "interests",
        Volunteer => "volunteer",
    }
}

impl Engine {
    /// Template used when a layout names none.
    pub fn default_template(&self) -> Option<Template> {
        match self {
            Engine::Latex => Some(Template::ModerncvBanking),
            Engine::Html => Some(Template::Calm),
            Engine::Markdown => None,
        }
    }

    /// Templates available for this engine.
    pub fn templates(&self) -> Vec<Template> {
        Template::ALL
            .iter()
            .copied()
            .filter(|t| t.engine() == *self)
            .collect()
    }
}

impl Template {
    /// Engine this template belongs to.
    pub fn engine(&self) -> Engine {
        match self {
            Template::ModerncvBanking | Template::ModerncvCasual | Template::ModerncvClassic => {
                Engine::Latex
            }
            Template::Calm | Template::Minimal => Engine::Html,
        }
    }
}

impl Locale {
    /// Whether the locale needs CJK font support.
    pub fn is_cjk(&self) -> bool {
        matches!(
            self,
            Locale::SimplifiedChinese
                | Locale::TraditionalChineseHongKong
                | Locale::TraditionalChineseTaiwan
                | Locale::Japanese
        )
    }
}

impl Section {
    /// Sections that appear in the body and can be reordered.
    pub const ORDERABLE: &'static [Section] = &[
        Section::Education,
        Section::Work,
        Section::Languages,
        Section::Skills,
        Section::Awards,
        Section::Certificates,
        Section::Publications,
        Section::References,
        Section::Projects,
        Section::Interests,
        Section::Volunteer,
    ];

    /// Whether the section can appear in `sections.order`.
    pub fn is_orderable(&self) -> bool {
        Section::ORDERABLE.contains(self)
    }
}

/// Human languages accepted in a language entry.
pub const LANGUAGES: &[&str] = &[
    "Afrikaans", "Albanian", "Amharic", "Arabic", "Armenian", "Azerbaijani", "Basque",
    "Belarusian", "Bengali", "Bosnian", "Bulgarian", "Burmese", "Cantonese", "Catalan",
    "Chinese", "Croatian", "Czech", "Danish", "Dutch", "English", "Estonian", "Filipino",
    "Finnish", "French", "Galician", "Georgian", "German", "Greek", "Gujarati", "Hausa",
    "Hebrew", "Hindi", "Hungarian", "Icelandic", "Igbo", "Indonesian", "Irish", "Italian",
    "Japanese", "Javanese", "Kannada", "Kazakh", "Khmer", "Korean", "Kurdish", "Kyrgyz", "Lao",
    "Latin", "Latvian", "Lithuanian", "Luxembourgish", "Macedonian", "Malay", "Malayalam",
    "Maltese", "Mandarin", "Maori", "Marathi", "Mongolian", "Nepali", "Norwegian", "Pashto",
    "Persian", "Polish", "Portuguese", "Punjabi", "Romanian", "Russian", "Sanskrit", "Serbian",
    "Sinhala", "Slovak", "Slovenian", "Somali", "Spanish", "Swahili", "Swedish", "Tagalog",
    "Tajik", "Tamil", "Tatar", "Telugu", "Thai", "Tibetan", "Turkish", "Turkmen", "Ukrainian",
    "Urdu", "Uyghur", "Uzbek", "Vietnamese", "Welsh", "Xhosa", "Yiddish", "Yoruba", "Zulu",
];

/// Countries and regions accepted in a location entry.
pub const COUNTRIES: &[&str] = &[
    "Afghanistan", "Aland Islands", "Albania", "Algeria", "American Samoa", "Andorra", "Angola",
    "Anguilla", "Antarctica", "Antigua and Barbuda", "Argentina", "Armenia", "Aruba",
    "Australia", "Austria", "Azerbaijan", "Bahamas", "Bahrain", "Bangladesh", "Barbados",
    "Belarus", "Belgium", "Belize", "Benin", "Bermuda", "Bhutan", "Bolivia",
    "Bosnia and Herzegovina", "Botswana", "Brazil", "British Indian Ocean Territory",
    "Brunei", "Bulgaria", "Burkina Faso", "Burundi", "Cambodia", "Cameroon", "Canada",
    "Cape Verde", "Cayman Islands", "Central African Republic", "Chad", "Chile", "China",
    "Christmas Island", "Cocos (Keeling) Islands", "Colombia", "Comoros", "Congo",
    "Cook Islands", "Costa Rica", "Cote d'Ivoire", "Croatia", "Cuba", "Curacao", "Cyprus",
    "Czech Republic", "Democratic Republic of the Congo", "Denmark", "Djibouti", "Dominica",
    "Dominican Republic", "Ecuador", "Egypt", "El Salvador", "Equatorial Guinea", "Eritrea",
    "Estonia", "Eswatini", "Ethiopia", "Falkland Islands", "Faroe Islands", "Fiji", "Finland",
    "France", "French Guiana", "French Polynesia", "Gabon", "Gambia", "Georgia", "Germany",
    "Ghana", "Gibraltar", "Greece", "Greenland", "Grenada", "Guadeloupe", "Guam", "Guatemala",
    "Guernsey", "Guinea", "Guinea-Bissau", "Guyana", "Haiti", "Honduras", "Hong Kong",
    "Hungary", "Iceland", "India", "Indonesia", "Iran", "Iraq", "Ireland", "Isle of Man",
    "Israel", "Italy", "Jamaica", "Japan", "Jersey", "Jordan", "Kazakhstan", "Kenya",
    "Kiribati", "Kosovo", "Kuwait", "Kyrgyzstan", "Laos", "Latvia", "Lebanon", "Lesotho",
    "Liberia", "Libya", "Liechtenstein", "Lithuania", "Luxembourg", "Macao", "Madagascar",
    "Malawi", "Malaysia", "Maldives", "Mali", "Malta", "Marshall Islands", "Martinique",
    "Mauritania", "Mauritius", "Mayotte", "Mexico", "Micronesia", "Moldova", "Monaco",
    "Mongolia", "Montenegro", "Montserrat", "Morocco", "Mozambique", "Myanmar", "Namibia",
    "Nauru", "Nepal", "Netherlands", "New Caledonia", "New Zealand", "Nicaragua", "Niger",
    "Nigeria", "Niue", "Norfolk Island", "North Korea", "North Macedonia",
    "Northern Mariana Islands", "Norway", "Oman", "Pakistan", "Palau", "Palestine", "Panama",
    "Papua New Guinea", "Paraguay", "Peru", "Philippines", "Pitcairn Islands", "Poland",
    "Portugal", "Puerto Rico", "Qatar", "Reunion", "Romania", "Russia", "Rwanda",
    "Saint Barthelemy", "Saint Helena", "Saint Kitts and Nevis", "Saint Lucia",
    "Saint Martin", "Saint Pierre and Miquelon", "Saint Vincent and the Grenadines", "Samoa",
    "San Marino", "Sao Tome and Principe", "Saudi Arabia", "Senegal", "Serbia", "Seychelles",
    "Sierra Leone", "Singapore", "Sint Maarten", "Slovakia", "Slovenia", "Solomon Islands",
    "Somalia", "South Africa", "South Korea", "South Sudan", "Spain", "Sri Lanka", "Sudan",
    "Suriname", "Svalbard and Jan Mayen", "Sweden", "Switzerland", "Syria", "Taiwan",
    "Tajikistan", "Tanzania", "Thailand", "Timor-Leste", "Togo", "Tokelau", "Tonga",
    "Trinidad and Tobago", "Tunisia", "Turkey", "Turkmenistan", "Turks and Caicos Islands",
    "Tuvalu", "Uganda", "Ukraine", "United Arab Emirates", "United Kingdom", "United States",
    "Uruguay", "Uzbekistan", "Vanuatu", "Vatican City", "Venezuela", "Vietnam",
    "Virgin Islands, British", "Virgin Islands, U.S.", "Wallis and Futuna", "Western Sahara",
    "Yemen", "Zambia", "Zimbabwe",
];
