//! Static translations of provider condition phrases.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    error::WeatherError,
    model::{HourlyForecast, WeatherModel},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Ja,
    Ko,
    Zh,
}

impl Language {
    pub const ALL: [Language; 10] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Ja,
        Language::Ko,
        Language::Zh,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Zh => "zh",
        }
    }

    /// Name of the language in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Ru => "Русский",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
            Language::Zh => "中文",
        }
    }

    /// Locale handed to the text-to-speech voice, e.g. `"pt-BR"`.
    pub fn speech_locale(&self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Es => "es-ES",
            Language::Fr => "fr-FR",
            Language::De => "de-DE",
            Language::It => "it-IT",
            Language::Pt => "pt-BR",
            Language::Ru => "ru-RU",
            Language::Ja => "ja-JP",
            Language::Ko => "ko-KR",
            Language::Zh => "zh-CN",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Es => ES,
            Language::Fr => FR,
            Language::De => DE,
            _ => &[],
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.native_name(), self.code())
    }
}

impl FromStr for Language {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == lower).ok_or_else(|| {
            let supported: Vec<_> = Language::ALL.iter().map(Language::code).collect();
            WeatherError::invalid_input(format!(
                "unknown language '{s}'. Supported languages: {}.",
                supported.join(", ")
            ))
        })
    }
}

const ES: &[(&str, &str)] = &[
    ("Clear", "Despejado"),
    ("Sunny", "Soleado"),
    ("Partly cloudy", "Parcialmente nublado"),
    ("Cloudy", "Nublado"),
    ("Overcast", "Nublado"),
    ("Mist", "Neblina"),
    ("Patchy rain possible", "Posible lluvia dispersa"),
    ("Light rain", "Lluvia ligera"),
    ("Moderate rain", "Lluvia moderada"),
    ("Heavy rain", "Lluvia intensa"),
];

const FR: &[(&str, &str)] = &[
    ("Clear", "Dégagé"),
    ("Sunny", "Ensoleillé"),
    ("Partly cloudy", "Partiellement nuageux"),
    ("Cloudy", "Nuageux"),
    ("Overcast", "Couvert"),
    ("Mist", "Brume"),
    ("Patchy rain possible", "Pluie éparse possible"),
    ("Light rain", "Pluie légère"),
    ("Moderate rain", "Pluie modérée"),
    ("Heavy rain", "Pluie forte"),
];

const DE: &[(&str, &str)] = &[
    ("Clear", "Klar"),
    ("Sunny", "Sonnig"),
    ("Partly cloudy", "Teilweise bewölkt"),
    ("Cloudy", "Bewölkt"),
    ("Overcast", "Bedeckt"),
    ("Mist", "Nebel"),
    ("Patchy rain possible", "Vereinzelt Regen möglich"),
    ("Light rain", "Leichter Regen"),
    ("Moderate rain", "Mäßiger Regen"),
    ("Heavy rain", "Starker Regen"),
];

/// Translated phrase, or `text` itself when the table has no entry.
pub fn translate_phrase<'a>(lang: Language, text: &'a str) -> &'a str {
    lang.table()
        .iter()
        .find(|(source, _)| *source == text)
        .map_or(text, |&(_, translated)| translated)
}

/// Copy of `model` with every condition description translated.
pub fn translate_model(model: &WeatherModel, lang: Language) -> WeatherModel {
    let mut out = model.clone();
    if lang.table().is_empty() {
        return out;
    }

    out.current.description = translate_phrase(lang, &model.current.description).to_owned();
    translate_hours(&mut out.today_hourly, lang);
    for day in &mut out.forecast {
        day.description = translate_phrase(lang, &day.description).to_owned();
        translate_hours(&mut day.hourly, lang);
    }
    out
}

fn translate_hours(hours: &mut [HourlyForecast], lang: Language) {
    for hour in hours {
        hour.description = translate_phrase(lang, &hour.description).to_owned();
    }
}
