//! Selections over a sorted pool. Each keeps the relative order of matches.

use crate::ipv4::{Ipv4, Ipv4Pool};

fn select<F>(pool: &Ipv4Pool, pred: F) -> Ipv4Pool
where
    F: Fn(&Ipv4) -> bool,
{
    pool.iter().filter(|ip| pred(*ip)).copied().collect()
}

pub fn filter_first_byte(pool: &Ipv4Pool, value: u8) -> Ipv4Pool {
    select(pool, |ip| ip.octets()[0] == value)
}

pub fn filter_first_two_bytes(pool: &Ipv4Pool, v0: u8, v1: u8) -> Ipv4Pool {
    select(pool, |ip| {
        let o = ip.octets();
        o[0] == v0 && o[1] == v1
    })
}

pub fn filter_any_byte(pool: &Ipv4Pool, value: u8) -> Ipv4Pool {
    select(pool, |ip| ip.contains(value))
}
