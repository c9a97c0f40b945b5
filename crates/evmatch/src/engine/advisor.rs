//! EV-versus-PHEV powertrain advice from lifestyle signals alone.
//!
//! The advisor never looks at the catalog. It tallies points for each
//! powertrain from the buyer's commute, trip pattern, charging access, and
//! emissions priority, then turns the gap into a recommendation with a
//! confidence level.

use serde::Serialize;

use crate::preferences::{ChargingTier, LongTripFrequency, UserPreferences};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PowertrainChoice {
    Ev,
    Phev,
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowertrainAdvice {
    pub recommendation: PowertrainChoice,
    pub confidence: Confidence,
    pub ev_score: u32,
    pub phev_score: u32,
    pub ev_percentage: f64,
    pub phev_percentage: f64,
    pub reasons_ev: Vec<String>,
    pub reasons_phev: Vec<String>,
}

pub fn recommend_powertrain(prefs: &UserPreferences) -> PowertrainAdvice {
    let mut ev_score = 0u32;
    let mut phev_score = 0u32;
    let mut reasons_ev = Vec::new();
    let mut reasons_phev = Vec::new();

    if prefs.daily_commute_km <= 50.0 {
        ev_score += 3;
        phev_score += 2;
        reasons_ev.push("Short commute easily covered by EV".to_string());
    } else if prefs.daily_commute_km <= 100.0 {
        ev_score += 2;
        phev_score += 2;
    } else {
        phev_score += 3;
        reasons_phev.push("Long commute benefits from PHEV flexibility".to_string());
    }

    match prefs.long_trips {
        LongTripFrequency::Never => {
            ev_score += 3;
            reasons_ev.push("No long trips needed".to_string());
        }
        LongTripFrequency::Rarely => {
            ev_score += 2;
            phev_score += 2;
        }
        LongTripFrequency::Monthly => {
            phev_score += 3;
            reasons_phev.push("Regular long trips easier with PHEV".to_string());
        }
        LongTripFrequency::Weekly => {
            phev_score += 4;
            reasons_phev.push("Frequent long trips - PHEV recommended".to_string());
        }
    }

    match prefs.home_charging {
        Some(ChargingTier::Level2) => {
            ev_score += 4;
            reasons_ev.push("Level 2 home charging available".to_string());
        }
        Some(ChargingTier::Level1) => {
            ev_score += 2;
            phev_score += 1;
        }
        None => {
            phev_score += 4;
            reasons_phev.push("No home charging - PHEV more flexible".to_string());
        }
    }

    if prefs.work_charging {
        ev_score += 2;
        reasons_ev.push("Work charging available".to_string());
    }

    if prefs.weights.zero_emissions >= 4 {
        ev_score += 3;
        reasons_ev.push("Strong preference for zero emissions".to_string());
    } else if prefs.weights.zero_emissions <= 2 {
        phev_score += 2;
    }

    let total = ev_score + phev_score;
    let (ev_percentage, phev_percentage) = if total > 0 {
        let total = f64::from(total);
        (
            f64::from(ev_score) / total * 100.0,
            f64::from(phev_score) / total * 100.0,
        )
    } else {
        (50.0, 50.0)
    };

    let (recommendation, confidence) = if ev_score > phev_score + 3 {
        (PowertrainChoice::Ev, Confidence::High)
    } else if phev_score > ev_score + 3 {
        (PowertrainChoice::Phev, Confidence::High)
    } else if ev_score > phev_score {
        (PowertrainChoice::Ev, Confidence::Medium)
    } else if phev_score > ev_score {
        (PowertrainChoice::Phev, Confidence::Medium)
    } else {
        (PowertrainChoice::Either, Confidence::Low)
    };

    PowertrainAdvice {
        recommendation,
        confidence,
        ev_score,
        phev_score,
        ev_percentage,
        phev_percentage,
        reasons_ev,
        reasons_phev,
    }
}
