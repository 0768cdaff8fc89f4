//! Read-only reference data shown next to the booking steps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl Address {
    /// `"San Diego, CA 92108"`
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clinic {
    pub logo: String,
    pub name: String,
    pub address: Address,
    pub email: String,
    pub phone: String,
}

impl Default for Clinic {
    fn default() -> Self {
        Self {
            logo: "/images/gold-spa.png".into(),
            name: "Gold Spa".into(),
            address: Address {
                line1: "2525 Camino del Rio S".into(),
                line2: "Suite 315 Room B".into(),
                city: "San Diego".into(),
                state: "CA".into(),
                zip: "92108".into(),
            },
            email: "goldspa@gmail.com".into(),
            phone: "+11 123 4567 222".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub name: String,
    pub duration_ms: u64,
    pub price_cents: u64,
}

impl Service {
    /// `"45 mins • $200"`
    pub fn summary(&self) -> String {
        format!(
            "{} • {}",
            format_duration(self.duration_ms),
            format_price(self.price_cents)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub clinic: Clinic,
    pub services: Vec<Service>,
}

impl Default for Catalog {
    fn default() -> Self {
        let botox = |id| Service {
            id,
            name: "Botox".into(),
            duration_ms: 45 * 60 * 1000,
            price_cents: 20_000,
        };
        Self {
            clinic: Clinic::default(),
            services: vec![botox(1), botox(2)],
        }
    }
}

/// Whole minutes, rounded down.
pub fn format_duration(duration_ms: u64) -> String {
    format!("{} mins", duration_ms / 60 / 1000)
}

/// Whole US dollars, rounded down, with thousands separators.
pub fn format_price(price_cents: u64) -> String {
    let digits = (price_cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}
