use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Contact and demographic fields pulled from the document head.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityFields {
    pub name: Option<String>,
    pub gender: Option<String>,
    /// Raw matched date string, not normalized to ISO.
    pub date_of_birth: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub tel: Option<String>,
}

/// Fields from the education section. All independently optional; no
/// cross-field consistency is enforced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EducationRecord {
    pub university: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub gpax: Option<f64>,
    pub graduation_year: Option<String>,
}

/// An ordered skill category, in the order it appeared in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

/// Skills either keep their source categories or collapse to one
/// deduplicated flat set when the section had no `Label:` structure.
#[derive(Debug, Clone, PartialEq)]
pub enum Skills {
    Categorized(Vec<SkillCategory>),
    Flat(Vec<String>),
}

impl Skills {
    /// Flat token list: the concatenation of all category lists in
    /// category order, or the flat set itself.
    pub fn flat(&self) -> Vec<String> {
        match self {
            Skills::Categorized(cats) => {
                cats.iter().flat_map(|c| c.skills.iter().cloned()).collect()
            }
            Skills::Flat(v) => v.clone(),
        }
    }
}

// Categorized skills serialize as an ordered JSON object, flat skills as an
// array. Manual impls keep category order without pulling in an ordered map.
impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Skills::Categorized(cats) => {
                let mut map = serializer.serialize_map(Some(cats.len()))?;
                for cat in cats {
                    map.serialize_entry(&cat.name, &cat.skills)?;
                }
                map.end()
            }
            Skills::Flat(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a skill list or a category-to-skills map")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Skills, A::Error> {
                let mut v = Vec::new();
                while let Some(s) = seq.next_element::<String>()? {
                    v.push(s);
                }
                Ok(Skills::Flat(v))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Skills, A::Error> {
                let mut cats = Vec::new();
                while let Some((name, skills)) = map.next_entry::<String, Vec<String>>()? {
                    cats.push(SkillCategory { name, skills });
                }
                Ok(Skills::Categorized(cats))
            }
        }

        deserializer.deserialize_any(SkillsVisitor)
    }
}

/// One work-history entry. The duration line is the anchor: without it the
/// entry is never produced, even when company/position are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(rename = "Company")]
    pub company: Option<String>,
    #[serde(rename = "Position")]
    pub position: Option<String>,
    #[serde(rename = "Duration")]
    pub duration: String,
    /// Bullet lines with their leading markers stripped.
    #[serde(rename = "Responsibilities")]
    pub responsibilities: Vec<String>,
}

/// The terminal aggregate returned from one extraction call. Every field is
/// always present in the serialized form; absent values are `null`
/// (absent is distinct from empty string and empty list).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Gender")]
    pub gender: Option<String>,
    #[serde(rename = "Date of Birth")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Age")]
    pub age: Option<i32>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Tel")]
    pub tel: Option<String>,
    #[serde(rename = "University")]
    pub university: Option<String>,
    #[serde(rename = "Degree")]
    pub degree: Option<String>,
    #[serde(rename = "Major")]
    pub major: Option<String>,
    #[serde(rename = "Gpax")]
    pub gpax: Option<f64>,
    #[serde(rename = "Graduation Year")]
    pub graduation_year: Option<String>,
    #[serde(rename = "Skills")]
    pub skills: Option<Skills>,
    #[serde(rename = "Experience")]
    pub experience: Option<Vec<ExperienceEntry>>,
}

// ── Tests ──
