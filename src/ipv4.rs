use crate::error::ParseError;
use crate::split::split;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::iter::FromIterator;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// One IPv4 address, most significant octet first.
///
/// The derived ordering compares octets left to right, so it is the plain
/// lexicographic order over the four bytes.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Debug)]
pub struct Ipv4 {
    octets: [u8; 4],
}

impl Ipv4 {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Ipv4 {
            octets: [a, b, c, d],
        }
    }

    /// Converts four decimal fields into an address.
    ///
    /// Every field must be made of ASCII digits only and fit in a byte.
    pub fn parse(fields: &[&str]) -> Result<Self, ParseError> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^[0-9]+$").expect("Not possible");
        }
        if fields.len() != 4 {
            return Err(ParseError::FieldCount(fields.len()));
        }
        let mut octets = [0u8; 4];
        for (octet, field) in octets.iter_mut().zip(fields) {
            if !RE.is_match(field) {
                return Err(ParseError::NotANumber(field.to_string()));
            }
            // only overflow is left once the digits matched
            *octet = field
                .parse::<u8>()
                .map_err(|_| ParseError::OutOfRange(field.to_string()))?;
        }
        let ip = Ipv4 { octets };
        trace!("parsed {}", ip);
        Ok(ip)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.octets
    }

    pub fn contains(&self, value: u8) -> bool {
        self.octets.contains(&value)
    }
}

impl FromStr for Ipv4 {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::parse(&split(s, '.'))
    }
}

impl From<[u8; 4]> for Ipv4 {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4 { octets }
    }
}

impl From<Ipv4> for Ipv4Addr {
    fn from(ip: Ipv4) -> Self {
        Ipv4Addr::from(ip.octets)
    }
}

impl Display for Ipv4 {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", Ipv4Addr::from(*self))
    }
}

/// Addresses of one run, in input order until sorted.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Ipv4Pool {
    inner: Vec<Ipv4>,
}

impl Display for Ipv4Pool {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        for ip in self.inner.iter() {
            writeln!(f, "{}", ip)?;
        }
        Ok(())
    }
}

impl FromIterator<Ipv4> for Ipv4Pool {
    fn from_iter<I: IntoIterator<Item = Ipv4>>(iter: I) -> Self {
        Ipv4Pool {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Ipv4Pool {
    pub fn new() -> Self {
        Ipv4Pool { inner: Vec::new() }
    }

    pub fn push(&mut self, ip: Ipv4) {
        self.inner.push(ip);
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ipv4> {
        self.inner.iter()
    }

    /// Greatest address first. Equal addresses keep their input order.
    pub fn sort_desc(&mut self) {
        self.inner.sort_by(|lhs, rhs| rhs.cmp(lhs));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn pool(v: &[&str]) -> Ipv4Pool {
        v.iter().map(|s| Ipv4::from_str(s).unwrap()).collect()
    }

    #[test]
    fn some_tests() {
        assert_eq!(Ok(Ipv4::new(1, 2, 3, 4)), Ipv4::parse(&["1", "2", "3", "4"]));
        assert_eq!(Ok(Ipv4::new(0, 0, 0, 0)), Ipv4::parse(&["0", "0", "0", "0"]));
        assert_eq!(
            Ok(Ipv4::new(255, 255, 255, 255)),
            Ipv4::from_str("255.255.255.255")
        );
        assert_eq!(Ok(Ipv4::new(10, 0, 0, 1)), Ipv4::from_str("010.0.0.1"));
        assert_eq!("0.0.0.0", Ipv4::new(0, 0, 0, 0).to_string());
        assert_eq!("46.70.225.39", Ipv4::new(46, 70, 225, 39).to_string());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Err(ParseError::OutOfRange("256".to_owned())),
            Ipv4::parse(&["256", "0", "0", "0"])
        );
        assert_eq!(
            Err(ParseError::OutOfRange("99999999999".to_owned())),
            Ipv4::from_str("1.99999999999.0.0")
        );
        assert_eq!(Err(ParseError::FieldCount(3)), Ipv4::from_str("1.2.3"));
        assert_eq!(Err(ParseError::FieldCount(5)), Ipv4::from_str("1.2.3.4.5"));
        assert_eq!(Err(ParseError::FieldCount(1)), Ipv4::from_str(""));
        assert_eq!(
            Err(ParseError::NotANumber("".to_owned())),
            Ipv4::from_str("1..3.4")
        );
        assert_eq!(
            Err(ParseError::NotANumber("x".to_owned())),
            Ipv4::from_str("1.2.x.4")
        );
        assert_eq!(
            Err(ParseError::NotANumber("+4".to_owned())),
            Ipv4::from_str("1.2.3.+4")
        );
        assert_eq!(
            Err(ParseError::NotANumber(" 4".to_owned())),
            Ipv4::from_str("1.2.3. 4")
        );
    }

    #[test]
    fn sort_tests() {
        let mut list = pool(&["1.1.1.1", "2.2.2.2", "1.2.3.4"]);
        list.sort_desc();
        assert_eq!(pool(&["2.2.2.2", "1.2.3.4", "1.1.1.1"]), list);
        assert_eq!("2.2.2.2\n1.2.3.4\n1.1.1.1\n", list.to_string());

        let mut list = pool(&["1.70.44.170", "222.82.198.61", "1.1.234.8", "222.173.235.246"]);
        list.sort_desc();
        assert_eq!(
            pool(&["222.173.235.246", "222.82.198.61", "1.70.44.170", "1.1.234.8"]),
            list
        );

        let mut list = Ipv4Pool::new();
        list.sort_desc();
        assert!(list.is_empty());
        assert_eq!("", list.to_string());
    }

    #[quickcheck]
    fn convert_tests(a: u8, b: u8, c: u8, d: u8) -> bool {
        let ip = Ipv4::new(a, b, c, d);
        Ok(ip) == Ipv4::from_str(&ip.to_string())
    }

    fn from_u32(x: u32) -> Ipv4 {
        Ipv4::from(x.to_be_bytes())
    }

    #[quickcheck]
    fn check_order(x: u32, y: u32) -> bool {
        let (a, b) = (from_u32(x), from_u32(y));
        a.cmp(&b) == x.cmp(&y) && u32::from(Ipv4Addr::from(a)) == x
    }

    #[quickcheck]
    fn check_sort_desc(xs: Vec<u32>) -> bool {
        let mut list: Ipv4Pool = xs.iter().copied().map(from_u32).collect();
        list.sort_desc();
        let mut expected = xs.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        list == expected.into_iter().map(from_u32).collect::<Ipv4Pool>()
    }

    #[quickcheck]
    fn check_contains(x: u32, v: u8) -> bool {
        from_u32(x).contains(v) == x.to_be_bytes().iter().any(|&o| o == v)
    }
}
