//! Music release records (albums, singles, EPs)

use serde::{Deserialize, Deserializer};

use super::value::{AttributeBag, Attributes, Value};
use super::{MediaType, MediaTypeModel, MEDIA_DB_TAG};

/// One music release as delivered by a metadata source
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MusicRelease {
    /// Release kind reported by the source, e.g. `album` or `single`
    pub sub_type: String,
    pub title: String,
    pub english_title: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    /// Name of the source the record was fetched from
    pub data_source: Option<String>,
    pub url: Option<String>,
    /// Identifier of the release within its data source
    pub id: Option<String>,
    pub genres: Vec<String>,
    pub artists: Vec<String>,
    pub rating: Option<f64>,
    pub personal_rating: Option<f64>,
}

impl MusicRelease {
    /// Create a release with the given title and no other data
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }

    pub fn with_english_title(mut self, title: impl Into<String>) -> Self {
        self.english_title = Some(title.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = Some(source.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_artists<I, S>(mut self, artists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artists = artists.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_personal_rating(mut self, rating: f64) -> Self {
        self.personal_rating = Some(rating);
        self
    }
}

impl MediaTypeModel for MusicRelease {
    fn media_type(&self) -> MediaType {
        MediaType::MusicRelease
    }

    fn attributes(&self) -> Attributes {
        let mut attrs: Attributes = vec![
            ("type".to_string(), Value::from(self.media_type().as_str())),
            ("subType".to_string(), Value::from(self.sub_type.as_str())),
            ("title".to_string(), Value::from(self.title.as_str())),
        ];
        if let Some(english_title) = &self.english_title {
            attrs.push(("englishTitle".to_string(), Value::from(english_title.as_str())));
        }
        attrs.push(("year".to_string(), Value::from(self.year.as_str())));

        let optional = [
            ("dataSource", &self.data_source),
            ("url", &self.url),
            ("id", &self.id),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                attrs.push((key.to_string(), Value::from(value.as_str())));
            }
        }

        attrs.push(("genres".to_string(), Value::from(self.genres.clone())));
        attrs.push(("artists".to_string(), Value::from(self.artists.clone())));

        if let Some(rating) = self.rating {
            attrs.push(("rating".to_string(), Value::Number(rating)));
        }
        if let Some(rating) = self.personal_rating {
            attrs.push(("personalRating".to_string(), Value::Number(rating)));
        }
        attrs
    }

    fn file_name(&self) -> String {
        format!(
            "{} ({} - {} - {})",
            self.title,
            self.artists.join(", "),
            self.year,
            self.sub_type
        )
    }

    fn tags(&self) -> Vec<String> {
        vec![
            MEDIA_DB_TAG.to_string(),
            "music".to_string(),
            "album".to_string(),
        ]
    }
}

impl AttributeBag for MusicRelease {
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes().as_slice().attribute(name)
    }
}

/// Accept `year: 1971` as well as `year: "1971"`
fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Integer(i) => i.to_string(),
        Raw::Float(f) => Value::Number(f).to_string(),
    })
}
