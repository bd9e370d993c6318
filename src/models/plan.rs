use serde::{Deserialize, Serialize};

/// A Medicare plan offering with cost and coverage attributes.
///
/// Currency fields are stored as parsed numbers but serialize as decimal
/// strings (`"44.10"`), matching the upstream plan-feed schema. The stored
/// `match_score` is externally supplied and is never reconciled with the
/// locally computed breakdown total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,

    #[serde(rename = "planName")]
    pub plan_name: String,

    pub carrier: String,

    pub year: u16,

    /// Star rating on the 1-5 CMS scale.
    #[serde(rename = "starRating")]
    pub star_rating: u8,

    #[serde(rename = "monthlyPremium", with = "currency_string")]
    pub monthly_premium: f64,

    #[serde(rename = "medicalDeductible", with = "currency_string")]
    pub medical_deductible: f64,

    #[serde(rename = "outOfPocketMax", with = "currency_string")]
    pub out_of_pocket_max: f64,

    #[serde(rename = "rxDrugDeductible", with = "currency_string")]
    pub rx_drug_deductible: f64,

    #[serde(rename = "estimatedAnnualRxCost", with = "currency_string")]
    pub estimated_annual_rx_cost: f64,

    #[serde(rename = "pharmaciesCovered")]
    pub pharmacies_covered: u32,

    /// The user's doctor, when in this plan's network.
    #[serde(rename = "doctorName", default)]
    pub doctor_name: Option<String>,

    /// Externally supplied match score, 0-100.
    #[serde(rename = "matchScore")]
    pub match_score: u8,

    #[serde(default)]
    pub recommended: bool,
}

impl Plan {
    /// Total premium cost over a plan year.
    #[inline]
    pub fn yearly_premium(&self) -> f64 {
        self.monthly_premium * 12.0
    }

    /// Basic validation: rating on the 1-5 scale, score capped at 100,
    /// non-negative currency amounts.
    pub fn is_valid(&self) -> bool {
        (1..=5).contains(&self.star_rating)
            && self.match_score <= 100
            && self.monthly_premium >= 0.0
            && self.medical_deductible >= 0.0
            && self.out_of_pocket_max >= 0.0
            && self.rx_drug_deductible >= 0.0
            && self.estimated_annual_rx_cost >= 0.0
    }

    /// Canonical key for lookups (lowercase id).
    pub fn key(&self) -> String {
        self.id.to_lowercase()
    }

    /// Build a baseline plan from the minimal details a user can supply
    /// about their current coverage. Fields the user is not asked for get
    /// neutral defaults; the record exists only to anchor impact math.
    pub fn current_plan_entry(plan_name: String, carrier: String, monthly_premium: f64) -> Self {
        Self {
            id: "current-plan".to_string(),
            plan_name,
            carrier,
            year: 2025,
            star_rating: 3,
            monthly_premium,
            medical_deductible: 0.0,
            out_of_pocket_max: 0.0,
            rx_drug_deductible: 0.0,
            estimated_annual_rx_cost: 0.0,
            pharmacies_covered: 1,
            doctor_name: None,
            match_score: 0,
            recommended: false,
        }
    }
}

mod currency_string {
    use serde::de::{Error, Visitor};
    use serde::{Deserializer, Serializer};

    use crate::models::money::parse_currency;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        struct CurrencyVisitor;

        impl Visitor<'_> for CurrencyVisitor {
            type Value = f64;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a currency amount as a decimal string or number")
            }

            fn visit_str<E: Error>(self, s: &str) -> Result<f64, E> {
                parse_currency(s)
                    .ok_or_else(|| E::custom(format!("invalid currency amount: {:?}", s)))
            }

            fn visit_f64<E: Error>(self, v: f64) -> Result<f64, E> {
                Ok(v)
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<f64, E> {
                Ok(v as f64)
            }

            fn visit_i64<E: Error>(self, v: i64) -> Result<f64, E> {
                Ok(v as f64)
            }
        }

        deserializer.deserialize_any(CurrencyVisitor)
    }
}
