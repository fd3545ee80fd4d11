/// Emphasis, `*inner*`. The inner text may not contain `*`, which keeps a
/// lone `*` from pairing up across a `**bold**` run.
pub struct Italic;

impl Italic {
    pub const DELIM: u8 = b'*';
}
