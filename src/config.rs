/// Fixed parameters of a run. The binary always uses `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Separates the address from the extra columns of a line.
    pub field_delim: char,
    /// Separates the octets of an address.
    pub octet_delim: char,
    /// Value of octet 0 for the first filtered view.
    pub first_byte: u8,
    /// Values of octets 0 and 1 for the second filtered view.
    pub first_two_bytes: (u8, u8),
    /// Value looked for in every octet for the third filtered view.
    pub any_byte: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field_delim: '\t',
            octet_delim: '.',
            first_byte: 1,
            first_two_bytes: (46, 70),
            any_byte: 46,
        }
    }
}
