/// Strong emphasis, `**inner**`.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
}
