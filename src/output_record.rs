use serde::Serialize;

#[derive(Hash, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputRecord<'a> {
    pub primary_artist: &'a str,
    pub title: &'a str,
}
