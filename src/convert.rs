//! Unit conversions. Every category funnels through one canonical unit so
//! each unit only knows how to enter and leave that intermediate.

use crate::error::PracticumError;

const KELVIN_OFFSET: f64 = 273.15;
const FAHRENHEIT_RATIO: f64 = 1.8;
const FAHRENHEIT_OFFSET: f64 = 32.0;

const METERS_PER_KM: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.34;
const METERS_PER_FOOT: f64 = 0.3048;

const KG_PER_POUND: f64 = 0.453592;
const KG_PER_OUNCE: f64 = 0.0283495;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Temperature units, canonical Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'C' => Some(Self::Celsius),
            'F' => Some(Self::Fahrenheit),
            'K' => Some(Self::Kelvin),
            _ => None,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FAHRENHEIT_OFFSET) / FAHRENHEIT_RATIO,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * FAHRENHEIT_RATIO + FAHRENHEIT_OFFSET,
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

/// Length units, canonical meters. `I` stands for miles; `M` is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Meters,
    Kilometers,
    Miles,
    Feet,
}

impl LengthUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Self::Meters),
            'K' => Some(Self::Kilometers),
            'I' => Some(Self::Miles),
            'F' => Some(Self::Feet),
            _ => None,
        }
    }

    fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => METERS_PER_KM,
            Self::Miles => METERS_PER_MILE,
            Self::Feet => METERS_PER_FOOT,
        }
    }
}

/// Weight units, canonical kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    Kilograms,
    Pounds,
    Ounces,
}

impl WeightUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'K' => Some(Self::Kilograms),
            'P' => Some(Self::Pounds),
            'O' => Some(Self::Ounces),
            _ => None,
        }
    }

    fn kg_per_unit(self) -> f64 {
        match self {
            Self::Kilograms => 1.0,
            Self::Pounds => KG_PER_POUND,
            Self::Ounces => KG_PER_OUNCE,
        }
    }
}

/// Time units, canonical seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'S' => Some(Self::Seconds),
            'M' => Some(Self::Minutes),
            'H' => Some(Self::Hours),
            _ => None,
        }
    }

    fn seconds_per_unit(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => SECONDS_PER_MINUTE,
            Self::Hours => SECONDS_PER_HOUR,
        }
    }
}

pub fn convert_temperature(value: f64, from: char, to: char) -> Result<f64, PracticumError> {
    let from = TempUnit::from_code(from).ok_or(PracticumError::InvalidUnit)?;
    let to = TempUnit::from_code(to).ok_or(PracticumError::InvalidUnit)?;
    Ok(to.from_celsius(from.to_celsius(value)))
}

pub fn convert_length(value: f64, from: char, to: char) -> Result<f64, PracticumError> {
    let from = LengthUnit::from_code(from).ok_or(PracticumError::InvalidUnit)?;
    let to = LengthUnit::from_code(to).ok_or(PracticumError::InvalidUnit)?;
    Ok(value * from.meters_per_unit() / to.meters_per_unit())
}

pub fn convert_weight(value: f64, from: char, to: char) -> Result<f64, PracticumError> {
    let from = WeightUnit::from_code(from).ok_or(PracticumError::InvalidUnit)?;
    let to = WeightUnit::from_code(to).ok_or(PracticumError::InvalidUnit)?;
    Ok(value * from.kg_per_unit() / to.kg_per_unit())
}

pub fn convert_time(value: f64, from: char, to: char) -> Result<f64, PracticumError> {
    let from = TimeUnit::from_code(from).ok_or(PracticumError::InvalidUnit)?;
    let to = TimeUnit::from_code(to).ok_or(PracticumError::InvalidUnit)?;
    Ok(value * from.seconds_per_unit() / to.seconds_per_unit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_fixed_points() {
        assert!((convert_temperature(0.0, 'C', 'F').unwrap() - 32.0).abs() < 1e-9);
        assert!((convert_temperature(100.0, 'C', 'F').unwrap() - 212.0).abs() < 1e-9);
        assert!((convert_temperature(0.0, 'C', 'K').unwrap() - 273.15).abs() < 1e-9);
        assert!((convert_temperature(-40.0, 'C', 'F').unwrap() + 40.0).abs() < 1e-9);
    }

    #[test]
    fn units_are_case_insensitive() {
        let upper = convert_temperature(25.0, 'C', 'K').unwrap();
        let lower = convert_temperature(25.0, 'c', 'k').unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn length_known_values() {
        assert!((convert_length(1.0, 'K', 'M').unwrap() - 1000.0).abs() < 1e-9);
        assert!((convert_length(1.0, 'I', 'M').unwrap() - 1609.34).abs() < 1e-9);
        assert!((convert_length(1.0, 'F', 'M').unwrap() - 0.3048).abs() < 1e-9);
    }

    #[test]
    fn weight_known_values() {
        assert!((convert_weight(1.0, 'P', 'K').unwrap() - 0.453592).abs() < 1e-9);
        assert!((convert_weight(16.0, 'O', 'P').unwrap() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn time_known_values() {
        assert!((convert_time(2.0, 'H', 'S').unwrap() - 7200.0).abs() < 1e-9);
        assert!((convert_time(90.0, 'S', 'M').unwrap() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn identity_conversions() {
        assert_eq!(convert_temperature(12.5, 'C', 'C').unwrap(), 12.5);
        assert_eq!(convert_length(12.5, 'M', 'M').unwrap(), 12.5);
        assert_eq!(convert_weight(12.5, 'K', 'K').unwrap(), 12.5);
        assert_eq!(convert_time(12.5, 'S', 'S').unwrap(), 12.5);
    }

    #[test]
    fn invalid_units_are_rejected() {
        assert!(matches!(
            convert_temperature(1.0, 'X', 'C'),
            Err(PracticumError::InvalidUnit)
        ));
        assert!(matches!(
            convert_length(1.0, 'M', 'Z'),
            Err(PracticumError::InvalidUnit)
        ));
        // Category codes do not leak across categories.
        assert!(matches!(
            convert_time(1.0, 'K', 'S'),
            Err(PracticumError::InvalidUnit)
        ));
    }
}
