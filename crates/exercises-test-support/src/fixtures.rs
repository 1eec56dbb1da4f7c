//! Shared fixtures.

/// A three-chapter story in the on-disk JSON format.
///
/// `intro` links to `new-york` and `denver`; `denver` is a dead end.
pub const SAMPLE_STORY_JSON: &str = r#"{
  "intro": {
    "title": "The Little Blue Gopher",
    "story": [
      "Once upon a time, long long ago, there was a little blue gopher.",
      "One of its friends sent an invitation to a conference on the other side of the country."
    ],
    "options": [
      { "text": "Go to New York and visit a friend.", "arc": "new-york" },
      { "text": "Head west to Denver.", "arc": "denver" }
    ]
  },
  "new-york": {
    "title": "Visiting New York",
    "story": [
      "Upon arriving in New York you and your friend head to a noodle shop."
    ],
    "options": [
      { "text": "Fly back home.", "arc": "intro" }
    ]
  },
  "denver": {
    "title": "Hiking in Denver",
    "story": [
      "The mountains are lovely this time of year."
    ],
    "options": []
  }
}"#;
