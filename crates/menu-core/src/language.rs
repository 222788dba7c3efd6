//! Static catalog of the languages the translation model can produce.
//!
//! Codes follow the mBART-50 convention (`ll_CC`, with `XX` standing in
//! for languages that are not tied to a single region). Display names are
//! given in the language itself so they can be shown in a language picker
//! without further translation.

use serde::{Deserialize, Serialize};

/// Source language of all menu text.
pub const SOURCE_LANGUAGE: &str = "ja_XX";

/// Target language used when a consumer does not name one.
pub const DEFAULT_TARGET_LANGUAGE: &str = "en_XX";

const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar_AR", "العربية"),
    ("cs_CZ", "Čeština"),
    ("de_DE", "Deutsch"),
    ("en_XX", "English"),
    ("es_XX", "Español"),
    ("et_EE", "Eesti"),
    ("fi_FI", "Suomi"),
    ("fr_XX", "Français"),
    ("gu_IN", "ગુજરાતી"),
    ("hi_IN", "हिन्दी"),
    ("it_IT", "Italiano"),
    ("ja_XX", "日本語"),
    ("kk_KZ", "Қазақша"),
    ("ko_KR", "한국어"),
    ("lt_LT", "Lietuvių"),
    ("lv_LV", "Latviešu"),
    ("my_MM", "မြန်မာဘာသာ"),
    ("ne_NP", "नेपाली"),
    ("nl_XX", "Nederlands"),
    ("ro_RO", "Română"),
    ("ru_RU", "Русский"),
    ("si_LK", "සිංහල"),
    ("tr_TR", "Türkçe"),
    ("vi_VN", "Tiếng Việt"),
    ("zh_CN", "中文"),
    ("af_ZA", "Afrikaans"),
    ("az_AZ", "Azərbaycanca"),
    ("bn_IN", "বাংলা"),
    ("fa_IR", "فارسی"),
    ("he_IL", "עברית"),
    ("hr_HR", "Hrvatski"),
    ("id_ID", "Bahasa Indonesia"),
    ("ka_GE", "ქართული"),
    ("km_KH", "ភាសាខ្មែរ"),
    ("mk_MK", "Македонски"),
    ("ml_IN", "മലയാളം"),
    ("mn_MN", "Монгол"),
    ("mr_IN", "मराठी"),
    ("pl_PL", "Polski"),
    ("ps_AF", "پښتو"),
    ("pt_XX", "Português"),
    ("sv_SE", "Svenska"),
    ("sw_KE", "Kiswahili"),
    ("ta_IN", "தமிழ்"),
    ("te_IN", "తెలుగు"),
    ("th_TH", "ไทย"),
    ("tl_XX", "Tagalog"),
    ("uk_UA", "Українська"),
    ("ur_PK", "اردو"),
    ("xh_ZA", "isiXhosa"),
    ("gl_ES", "Galego"),
    ("sl_SI", "Slovenščina"),
];

/// One entry of the language catalog, as presented to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LanguageInfo {
    /// Language code, e.g. `en_XX`.
    pub code: String,
    /// Native display name.
    pub name: String,
    /// Lowercase country code for flag icons, e.g. `us`.
    pub flag: String,
}

/// Read-only view over the supported language table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageCatalog;

impl LanguageCatalog {
    /// Returns every supported `(code, name)` pair in catalog order.
    #[must_use]
    pub fn list_supported() -> &'static [(&'static str, &'static str)] {
        SUPPORTED_LANGUAGES
    }

    /// Returns the catalog as consumer-facing entries, flags included.
    #[must_use]
    pub fn entries() -> Vec<LanguageInfo> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|(code, name)| LanguageInfo {
                code: (*code).to_string(),
                name: (*name).to_string(),
                flag: Self::flag_code(code),
            })
            .collect()
    }

    /// Looks up the display name of a language code.
    #[must_use]
    pub fn display_name(code: &str) -> Option<&'static str> {
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name)
    }

    /// Returns the catalog entry for a code, if supported.
    #[must_use]
    pub fn find(code: &str) -> Option<LanguageInfo> {
        Self::display_name(code).map(|name| LanguageInfo {
            code: code.to_string(),
            name: name.to_string(),
            flag: Self::flag_code(code),
        })
    }

    /// Checks whether the model can translate into `code`.
    #[must_use]
    pub fn is_supported(code: &str) -> bool {
        Self::display_name(code).is_some()
    }

    /// Number of supported languages.
    #[must_use]
    pub fn len() -> usize {
        SUPPORTED_LANGUAGES.len()
    }

    /// Derives the flag icon code for a language code.
    ///
    /// The region suffix is lowercased. Region-neutral codes (`XX`) map to
    /// `us` for English and to `un` otherwise, Japanese included.
    #[must_use]
    pub fn flag_code(code: &str) -> String {
        let region = code
            .rsplit_once('_')
            .map_or(code, |(_, region)| region)
            .to_lowercase();
        if region == "xx" {
            if code == "en_XX" {
                "us".to_string()
            } else {
                "un".to_string()
            }
        } else {
            region
        }
    }
}
