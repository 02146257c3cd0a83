use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::{debug, warn};

use crate::color::{Color, Hsv};
use crate::palettes::palette::{Palette, PaletteEvent};

/// HSV components within this distance of each other tie on that key.
const HSV_EPSILON: f64 = 0.001;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
	/// Ascending hue, then saturation, then value
	Hue,
	/// Brightest first, then descending hue and saturation
	Value,
	/// Most saturated first, then descending value and ascending hue
	Saturation,
	/// Brightest first by broadcast luma
	Luminance,
}

impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			SortOrder::Hue => write!(f, "hue"),
			SortOrder::Value => write!(f, "value"),
			SortOrder::Saturation => write!(f, "saturation"),
			SortOrder::Luminance => write!(f, "luminance"),
		}
	}
}

impl FromStr for SortOrder {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"hue" => Ok(SortOrder::Hue),
			"value" => Ok(SortOrder::Value),
			"saturation" => Ok(SortOrder::Saturation),
			"luminance" => Ok(SortOrder::Luminance),
			_ => Err(format!("Unknown sort order \"{s}\"")),
		}
	}
}

/// Orders the two values unless they're close enough to tie.
fn unless_tied(a: f64, b: f64) -> Option<Ordering> {
	if (a - b).abs() > HSV_EPSILON {
		Some(a.total_cmp(&b))
	} else {
		None
	}
}

impl SortOrder {
	/// Where `a` goes relative to `b`. The tolerance on the HSV keys makes
	/// this non-transitive, so palettes are sorted with `stable_sort_by`.
	pub fn compare(&self, a: &Color, b: &Color) -> Ordering {
		self.compare_hsv((a, &a.to_hsv()), (b, &b.to_hsv()))
	}

	fn compare_hsv(&self, (a, ha): (&Color, &Hsv), (b, hb): (&Color, &Hsv)) -> Ordering {
		match self {
			SortOrder::Hue => unless_tied(ha.h, hb.h)
				.or_else(|| unless_tied(ha.s, hb.s))
				.unwrap_or_else(|| ha.v.total_cmp(&hb.v)),
			SortOrder::Value => unless_tied(hb.v, ha.v)
				.or_else(|| unless_tied(hb.h, ha.h))
				.unwrap_or_else(|| hb.s.total_cmp(&ha.s)),
			SortOrder::Saturation => unless_tied(hb.s, ha.s)
				.or_else(|| unless_tied(hb.v, ha.v))
				.unwrap_or_else(|| ha.h.total_cmp(&hb.h)),
			SortOrder::Luminance => b.luminance().total_cmp(&a.luminance()),
		}
	}
}

/// Bottom-up merge sort. Stable, and unlike `slice::sort_by` it never panics
/// when `cmp` isn't a total order; it just produces some permutation.
fn stable_sort_by<T, F>(items: &mut Vec<T>, mut cmp: F)
where
	T: Clone,
	F: FnMut(&T, &T) -> Ordering,
{
	let len = items.len();
	if len < 2 {
		return;
	}

	let mut scratch = items.clone();
	let mut width = 1;
	while width < len {
		for start in (0..len).step_by(2 * width) {
			let mid = (start + width).min(len);
			let end = (start + 2 * width).min(len);
			let (mut left, mut right) = (start, mid);
			for slot in scratch[start..end].iter_mut() {
				// right only wins when strictly smaller
				let take_left = left < mid && (right >= end || cmp(&items[right], &items[left]) != Ordering::Less);
				if take_left {
					*slot = items[left].clone();
					left += 1;
				} else {
					*slot = items[right].clone();
					right += 1;
				}
			}
		}
		std::mem::swap(items, &mut scratch);
		width *= 2;
	}
}

impl Palette {
	/// Stable sort, so colors that compare equal keep their relative order.
	pub fn sort_palette(&mut self, order: SortOrder) {
		debug!(%order, colors = self.colors.len(), "sorting palette");
		let mut keyed = self.colors.iter().map(|c| (*c, c.to_hsv())).collect::<Vec<(Color, Hsv)>>();
		stable_sort_by(&mut keyed, |(a, ha), (b, hb)| order.compare_hsv((a, ha), (b, hb)));
		self.colors = keyed.into_iter().map(|(c, _)| c).collect();
		self.notify(PaletteEvent::Sorted(order));
	}

	/// Sorts by an order given by name. Unknown names leave the palette as it is.
	pub fn sort_palette_by_name(&mut self, order: &str) {
		match order.parse::<SortOrder>() {
			Ok(order) => self.sort_palette(order),
			Err(e) => warn!("{e}, palette left unsorted"),
		}
	}
}
