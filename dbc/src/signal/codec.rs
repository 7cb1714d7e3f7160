//! [MODULE B] Scalar Codec. Layers sign extension, scale/offset and choice
//! lookup on top of [MODULE A]'s raw bit packing, per spec §4.2.

use super::Signal;
use crate::error::{Error, Result};
use crate::value::Value;

/// Round half-to-even ("banker's rounding"), matching the fixtures in spec
/// §8 scenario 1 (`Temperature: 250.55` must round the same way on encode
/// as the reference tooling does on decode). Hand-rolled rather than
/// depending on an unstable std API.
pub fn round_half_to_even(x: f64) -> i64 {
    let floor = x.floor();
    let diff = x - floor;
    let rounded = if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    };
    rounded as i64
}

fn mask(length: u8) -> u64 {
    if length >= 64 {
        u64::MAX
    } else {
        (1u64 << length) - 1
    }
}

pub fn encode(signal: &Signal, value: &Value) -> Result<u64> {
    let physical = match (value, &signal.choices) {
        (Value::Label(label), Some(choices)) => {
            let raw = choices.raw_for(label).ok_or_else(|| Error::UnknownChoice {
                signal: signal.name.clone(),
                label: label.clone(),
            })?;
            return Ok((raw as u64) & mask(signal.length));
        }
        (Value::Label(label), None) => {
            return Err(Error::UnknownChoice {
                signal: signal.name.clone(),
                label: label.clone(),
            });
        }
        (other, _) => other.as_f64().expect("numeric Value variant"),
    };

    let raw_f = (physical - signal.offset) / signal.scale;
    let raw = round_half_to_even(raw_f);

    // `as u64` on a negative `i64` reproduces its two's-complement bit
    // pattern, which masking then narrows to the signal's declared width.
    Ok((raw as u64) & mask(signal.length))
}

pub fn decode(signal: &Signal, raw: u64) -> Value {
    let raw_masked = raw & mask(signal.length);

    if signal.is_signed {
        if let Some(choices) = &signal.choices {
            if let Some(label) = choices.label_for(sign_extend(raw_masked, signal.length)) {
                return Value::Label(label.to_string());
            }
        }
    } else if let Some(choices) = &signal.choices {
        if let Some(label) = choices.label_for(raw_masked as i64) {
            return Value::Label(label.to_string());
        }
    }

    let physical = if signal.is_signed {
        (sign_extend(raw_masked, signal.length) as f64) * signal.scale + signal.offset
    } else {
        (raw_masked as f64) * signal.scale + signal.offset
    };

    if signal.scale == 1.0 && signal.offset == 0.0 {
        Value::Int(physical as i64)
    } else {
        Value::Float(physical)
    }
}

fn sign_extend(raw: u64, length: u8) -> i64 {
    if length >= 64 {
        return raw as i64;
    }
    let sign_bit = 1u64 << (length - 1);
    if raw & sign_bit != 0 {
        (raw as i64) - (1i64 << length)
    } else {
        raw as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::byte_order::ByteOrder;

    #[test]
    fn round_half_to_even_ties_to_even_neighbour() {
        assert_eq!(round_half_to_even(0.5), 0);
        assert_eq!(round_half_to_even(1.5), 2);
        assert_eq!(round_half_to_even(2.5), 2);
        assert_eq!(round_half_to_even(-0.5), 0);
        assert_eq!(round_half_to_even(-1.5), -2);
    }

    #[test]
    fn signed_round_trip_with_scale_and_offset() {
        let mut signal = Signal::new("Temp", 16, 8, ByteOrder::LittleEndian, true, 1.0, -40.0);
        signal.set_range(-40.0, 215.0);
        let raw = signal.encode(&Value::Float(100.0)).unwrap();
        assert_eq!(signal.decode(raw), Value::Int(100));
    }

    #[test]
    fn unsigned_decode_returns_float_when_scale_is_not_one() {
        let signal = Signal::new("Radius", 0, 8, ByteOrder::LittleEndian, false, 0.1, 0.0);
        let raw = signal.encode(&Value::Float(3.2)).unwrap();
        assert_eq!(signal.decode(raw), Value::Float(32.0 * 0.1));
    }

    #[test]
    fn choices_resolve_label_round_trip() {
        let mut signal = Signal::new("Enable", 24, 1, ByteOrder::LittleEndian, false, 1.0, 0.0);
        let mut choices = crate::choices::Choices::new();
        choices.insert(0, "Disabled");
        choices.insert(1, "Enabled");
        signal.set_choices(choices);

        let raw = signal.encode(&Value::Label("Enabled".into())).unwrap();
        assert_eq!(raw, 1);
        assert_eq!(signal.decode(raw), Value::Label("Enabled".into()));

        let raw_numeric = signal.encode(&Value::Int(1)).unwrap();
        assert_eq!(raw_numeric, raw);
    }

    #[test]
    fn unknown_choice_label_errors() {
        let mut signal = Signal::new("Enable", 24, 1, ByteOrder::LittleEndian, false, 1.0, 0.0);
        let mut choices = crate::choices::Choices::new();
        choices.insert(0, "Disabled");
        signal.set_choices(choices);

        let err = signal.encode(&Value::Label("Bogus".into())).unwrap_err();
        assert!(matches!(err, Error::UnknownChoice { .. }));
    }
}
