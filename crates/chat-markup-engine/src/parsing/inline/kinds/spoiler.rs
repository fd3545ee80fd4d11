/// Hidden-until-clicked text, `||inner||`.
pub struct Spoiler;

impl Spoiler {
    pub const DELIM: &'static str = "||";
}
