//! id-ID display formatting for money and dates.
//!
//! Formatting is presentation-only: filtering and payloads always use the
//! raw wire values.

/// Formats an amount as rupiah with dot thousands separators: `Rp 30.000`.
pub fn rupiah(amount: i64) -> String {
	let negative = amount < 0;
	let digits = amount.unsigned_abs().to_string();

	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	let offset = digits.len() % 3;
	for (i, c) in digits.chars().enumerate() {
		if i != 0 && (i + 3 - offset) % 3 == 0 {
			grouped.push('.');
		}
		grouped.push(c);
	}

	if negative {
		format!("Rp -{grouped}")
	} else {
		format!("Rp {grouped}")
	}
}

/// Renders the date part of an ISO string as id-ID `D/M/YYYY`.
///
/// Inputs that do not start with `YYYY-MM-DD` are returned unchanged.
pub fn short_date(iso: &str) -> String {
	let date = iso.get(..10).unwrap_or(iso);
	let mut parts = date.split('-');
	let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
		return iso.to_string();
	};
	let (Ok(year), Ok(month), Ok(day)) = (
		year.parse::<u16>(),
		month.parse::<u8>(),
		day.parse::<u8>(),
	) else {
		return iso.to_string();
	};
	format!("{day}/{month}/{year}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, "Rp 0")]
	#[case(500, "Rp 500")]
	#[case(30000, "Rp 30.000")]
	#[case(150000, "Rp 150.000")]
	#[case(1234567, "Rp 1.234.567")]
	#[case(-2500, "Rp -2.500")]
	fn rupiah_grouping(#[case] amount: i64, #[case] expected: &str) {
		assert_eq!(rupiah(amount), expected);
	}

	#[rstest]
	#[case("2024-02-29", "29/2/2024")]
	#[case("2025-10-01", "1/10/2025")]
	#[case("2025-10-01T08:30:00Z", "1/10/2025")]
	fn short_date_id_locale(#[case] iso: &str, #[case] expected: &str) {
		assert_eq!(short_date(iso), expected);
	}

	#[rstest]
	#[case("")]
	#[case("not-a-date")]
	#[case("2024/02/29")]
	fn short_date_passes_through_unparseable(#[case] input: &str) {
		assert_eq!(short_date(input), input);
	}
}
