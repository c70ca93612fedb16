//! Static GraphQL documents handed to the explorer.

/// Line lookup by id, used by the GraphiQL line links
pub const LINE_QUERY: &str = r#"query line($id: ID!) {
  line(id: $id) {
    id
    name
    publicCode
    transportMode
    transportSubmode
    authority {
      id
      name
    }
    presentation {
      colour
      textColour
    }
    quays {
      id
      name
      publicCode
    }
  }
}
"#;

pub fn line_query_as_string() -> &'static str {
    LINE_QUERY
}
