use crate::color::Color;

/// Hue in degrees `[0, 360)`, saturation, value and alpha in `[0, 1]`.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Hsv {
	pub h: f64,
	pub s: f64,
	pub v: f64,
	pub a: f64,
}

impl Hsv {
	pub fn to_color(&self) -> Color {
		Color::from_hsv(self.h, self.s, self.v, self.a)
	}
}

impl From<Hsv> for Color {
	fn from(hsv: Hsv) -> Self {
		hsv.to_color()
	}
}

impl Color {
	/// Hue is 0 for grays, saturation is 0 for black.
	pub fn to_hsv(&self) -> Hsv {
		let r = self.r() as f64 / 255.0;
		let g = self.g() as f64 / 255.0;
		let b = self.b() as f64 / 255.0;

		let max = r.max(g).max(b);
		let min = r.min(g).min(b);
		let delta = max - min;

		let mut h = 0.0;
		if delta != 0.0 {
			if max == r {
				h = 60.0 * (((g - b) / delta) % 6.0);
			} else if max == g {
				h = 60.0 * ((b - r) / delta + 2.0);
			} else {
				h = 60.0 * ((r - g) / delta + 4.0);
			}
		}

		// the remainder keeps the sign of the dividend
		if h < 0.0 {
			h += 360.0;
		}

		let s = if max == 0.0 { 0.0 } else { delta / max };

		Hsv { h, s, v: max, a: self.a() }
	}

	/// Inverse of [Color::to_hsv]. Hue wraps around, saturation and value are clamped.
	pub fn from_hsv(h: f64, s: f64, v: f64, a: f64) -> Color {
		let h = h.rem_euclid(360.0);
		let s = s.clamp(0.0, 1.0);
		let v = v.clamp(0.0, 1.0);

		let c = v * s;
		let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
		let m = v - c;

		let (r, g, b) = match h {
			h if h < 60.0 => (c, x, 0.0),
			h if h < 120.0 => (x, c, 0.0),
			h if h < 180.0 => (0.0, c, x),
			h if h < 240.0 => (0.0, x, c),
			h if h < 300.0 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};

		let channel = |v: f64| ((v + m) * 255.0).round() as i32;
		Color::new(channel(r), channel(g), channel(b), a)
	}
}
