#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
    /// Single-line text field. `cursor` is a character index into `value`.
    TextInput {
        value: String,
        cursor: usize,
        placeholder: Option<String>,
    },
}
