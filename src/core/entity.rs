use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const EMAIL_DOMAIN: &str = "@gmail.com";
const IDENTITY_DIGITS: usize = 18;
const TELEPHONE_DIGITS: usize = 10;

pub const PROVINCES: [&str; 8] = [
    "Beijing",
    "Shanghai",
    "Chongqing",
    "Tianjin",
    "Shandong",
    "Hainan",
    "Liaoning",
    "Sichuan",
];

/// Node classes of the identity graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityClass {
    Identity,
    Email,
    Telephone,
    Province,
}

impl EntityClass {
    pub const ALL: [EntityClass; 4] = [
        EntityClass::Identity,
        EntityClass::Email,
        EntityClass::Telephone,
        EntityClass::Province,
    ];

    /// Classes linked to identities by edges.
    pub const ATTRIBUTES: [EntityClass; 3] = [
        EntityClass::Email,
        EntityClass::Telephone,
        EntityClass::Province,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityClass::Identity => "identity",
            EntityClass::Email => "email",
            EntityClass::Telephone => "telephone",
            EntityClass::Province => "province",
        }
    }

    /// Produces one synthetic value. Values are not unique.
    pub fn synthesize<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            EntityClass::Identity => digits(rng, IDENTITY_DIGITS),
            EntityClass::Email => {
                let len = rng.random_range(3..=10);
                let mut email = (0..len)
                    .filter_map(|_| LETTERS.choose(rng).map(|b| *b as char))
                    .collect::<String>();
                email.push_str(EMAIL_DOMAIN);
                email
            }
            EntityClass::Telephone => {
                let mut phone = String::with_capacity(TELEPHONE_DIGITS + 1);
                phone.push('1');
                phone.push_str(&digits(rng, TELEPHONE_DIGITS));
                phone
            }
            EntityClass::Province => PROVINCES[rng.random_range(0..PROVINCES.len())].to_string(),
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count)
        .map(|_| char::from(rng.random_range(b'0'..=b'9')))
        .collect()
}
