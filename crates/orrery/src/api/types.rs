use serde::{Deserialize, Serialize};

/// Classification of a catalog body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Asteroid,
    DwarfPlanet,
}

impl BodyKind {
    /// Numeric tag written into the instance buffer (read by the JS renderer).
    pub fn tag(self) -> f32 {
        match self {
            BodyKind::Star => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Moon => 2.0,
            BodyKind::Asteroid => 3.0,
            BodyKind::DwarfPlanet => 4.0,
        }
    }
}

/// Which part of the constants table a body was loaded from.
/// Drives the belt visibility toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogGroup {
    /// Sun, planets and their moons.
    MainSystem,
    AsteroidBelt,
    KuiperBelt,
    DwarfPlanets,
}

/// Orbital class tag of a followed asteroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidClass {
    #[serde(rename = "Near-Earth")]
    NearEarth,
    #[serde(rename = "Main Belt")]
    MainBelt,
    Trojan,
    Centaur,
}

impl AsteroidClass {
    pub fn color(self) -> &'static str {
        match self {
            AsteroidClass::NearEarth => "#8B4513",
            AsteroidClass::MainBelt => "#696969",
            AsteroidClass::Trojan | AsteroidClass::Centaur => "#A0522D",
        }
    }
}

/// Origin class of a meteorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeteoriteKind {
    Asteroid,
    Comet,
    Debris,
    /// Interstellar or otherwise unclassified visitor.
    Artificial,
}

impl MeteoriteKind {
    /// Default display colour for meteorites of this kind.
    pub fn color(self) -> &'static str {
        match self {
            MeteoriteKind::Asteroid => "#FF6B35",
            MeteoriteKind::Comet => "#4ECDC4",
            MeteoriteKind::Debris => "#F39C12",
            MeteoriteKind::Artificial => "#9B59B6",
        }
    }
}

/// Parse a `#RRGGBB` colour into normalized RGB. Malformed input yields white.
pub fn parse_hex_color(hex: &str) -> (f32, f32, f32) {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        log::warn!("unparseable colour {hex:?}, using white");
        return (1.0, 1.0, 1.0);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .unwrap_or(1.0)
    };
    (channel(0), channel(2), channel(4))
}

/// Serde adapter writing [`time::Date`] as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::{macros::format_description, Date};

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        Date::parse(&text, format_description!("[year]-[month]-[day]"))
            .map_err(serde::de::Error::custom)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            text.map(|t| {
                Date::parse(&t, time::macros::format_description!("[year]-[month]-[day]"))
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
        }
    }
}
