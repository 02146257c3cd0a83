use std::fmt::{Debug, Display, Formatter};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::color::Color;
use crate::error::PaletteError;
use crate::palettes::sort::SortOrder;

pub const DEFAULT_PALETTE_NAME: &str = "Default";

/// The palette every new editor session starts with.
pub const DEFAULT_COLORS: [[u8; 3]; 32] = [
	[139, 0, 0],     // dark red
	[178, 34, 34],   // firebrick
	[205, 92, 92],   // indian red
	[218, 165, 32],  // goldenrod
	[255, 215, 0],   // gold
	[240, 230, 140], // khaki
	[85, 107, 47],   // dark olive green
	[107, 142, 35],  // olive drab
	[34, 139, 34],   // forest green
	[60, 179, 113],  // medium sea green
	[0, 128, 128],   // teal
	[64, 224, 208],  // turquoise
	[0, 191, 255],   // deep sky blue
	[30, 144, 255],  // dodger blue
	[65, 105, 225],  // royal blue
	[138, 43, 226],  // blue violet
	[147, 112, 219], // medium purple
	[186, 85, 211],  // medium orchid
	[199, 21, 133],  // medium violet red
	[219, 112, 147], // pale violet red
	[255, 105, 180], // hot pink
	[255, 20, 147],  // deep pink
	[255, 0, 0],     // red
	[255, 69, 0],    // orange red
	[255, 140, 0],   // dark orange
	[255, 165, 0],   // orange
	[154, 205, 50],  // yellow green
	[0, 100, 0],     // dark green
	[0, 255, 127],   // spring green
	[0, 255, 255],   // cyan
	[70, 130, 180],  // steel blue
	[128, 0, 128],   // purple
];

/// What changed in a palette. Sent to subscribers after the change is complete.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteEvent {
	Added(Color),
	Cleared,
	Sorted(SortOrder),
	/// The whole palette was swapped out by an image scan or a file load.
	Replaced { count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&PaletteEvent, &[Color]) + Send>;

/// An ordered working set of colors.
///
/// Order only carries meaning after [Palette::sort_palette]; until then it's
/// insertion or import order. All mutation goes through `&mut self`, and bulk
/// replacements swap in a fully built color list, so a failed load never
/// leaves a half-replaced palette behind.
pub struct Palette {
	pub name: String,
	pub(crate) colors: Vec<Color>,
	auto_add: bool,
	observers: Vec<(SubscriptionId, Observer)>,
	next_subscription: u64,
}

impl Default for Palette {
	fn default() -> Self {
		Self::from(DEFAULT_COLORS.iter().map(|&c| Color::from(c)).collect::<Vec<Color>>())
	}
}

impl From<Vec<Color>> for Palette {
	/// Takes the colors verbatim, duplicates included.
	fn from(colors: Vec<Color>) -> Self {
		Self {
			name: DEFAULT_PALETTE_NAME.to_string(),
			colors,
			auto_add: true,
			observers: Vec::new(),
			next_subscription: 0,
		}
	}
}

impl Clone for Palette {
	/// Subscribers are not cloned.
	fn clone(&self) -> Self {
		Self {
			name: self.name.clone(),
			colors: self.colors.clone(),
			auto_add: self.auto_add,
			observers: Vec::new(),
			next_subscription: 0,
		}
	}
}

impl Debug for Palette {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Palette")
			.field("name", &self.name)
			.field("colors", &self.colors)
			.field("auto_add", &self.auto_add)
			.field("observers", &self.observers.len())
			.finish()
	}
}

impl PartialEq for Palette {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name && self.colors == other.colors
	}
}

impl Palette {
	/// An empty palette, as opposed to [Palette::default] which holds the built-in colors.
	pub fn empty() -> Self {
		Self::from(Vec::new())
	}

	pub fn colors(&self) -> &[Color] {
		&self.colors
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	pub fn has_color(&self, color: &Color) -> bool {
		self.colors.iter().any(|c| c.equals(color, 0.0))
	}

	/// Appends `color` unless an identical one is already present.
	pub fn add_color(&mut self, color: Color) {
		if self.has_color(&color) {
			return;
		}

		self.colors.push(color);
		self.notify(PaletteEvent::Added(color));
	}

	pub fn clear_palette(&mut self) {
		if self.colors.is_empty() {
			return;
		}

		self.colors.clear();
		self.notify(PaletteEvent::Cleared);
	}

	pub fn auto_add_color(&self) -> bool {
		self.auto_add
	}

	pub fn toggle_auto_add_color(&mut self) {
		self.auto_add = !self.auto_add;
	}

	/// Called by drawing tools once a color has been used on the canvas.
	/// Adds it while auto-add is enabled.
	pub fn note_used_color(&mut self, color: Color) {
		if self.auto_add {
			self.add_color(color);
		}
	}

	/// Registers a callback that runs after every mutation that changed the palette.
	pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
	where
		F: FnMut(&PaletteEvent, &[Color]) + Send + 'static,
	{
		let id = SubscriptionId(self.next_subscription);
		self.next_subscription += 1;
		self.observers.push((id, Box::new(observer)));
		id
	}

	/// Returns false if `id` wasn't subscribed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.observers.len();
		self.observers.retain(|(i, _)| *i != id);
		self.observers.len() != before
	}

	/// Loads a palette file, picking the format by extension, and returns the
	/// number of colors read. On error the palette is left as it was.
	pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, PaletteError> {
		match PaletteFormat::guess(&path) {
			Some(PaletteFormat::Gpl) => {
				let gpl = Self::parse_gpl(&fs::read_to_string(&path)?)?;
				if let Some(name) = gpl.name {
					self.name = name;
				}
				let count = gpl.colors.len();
				self.replace_colors(gpl.colors);
				Ok(count)
			}
			Some(PaletteFormat::Json) => self.load_from_json_file(&path),
			None => Err(PaletteError::UnsupportedFormat),
		}
	}

	pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PaletteError> {
		match PaletteFormat::guess(&path) {
			Some(PaletteFormat::Gpl) => self.save_to_gpl_file(&path),
			Some(PaletteFormat::Json) => self.save_to_json_file(&path),
			None => Err(PaletteError::UnsupportedFormat),
		}
	}

	/// Swaps in a complete new color list.
	pub(crate) fn replace_colors(&mut self, colors: Vec<Color>) {
		self.colors = colors;
		self.notify(PaletteEvent::Replaced { count: self.colors.len() });
	}

	pub(crate) fn notify(&mut self, event: PaletteEvent) {
		if self.observers.is_empty() {
			return;
		}

		debug!(?event, observers = self.observers.len(), "notifying palette observers");
		for (_, observer) in self.observers.iter_mut() {
			observer(&event, &self.colors);
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaletteFormat {
	Gpl, // .gpl
	Json, // .json
}

impl PaletteFormat {
	pub fn guess<P: AsRef<Path>>(path: P) -> Option<PaletteFormat> {
		let ext = path.as_ref().extension()?.to_str()?.to_lowercase();

		match ext.as_str() {
			"gpl" => Some(PaletteFormat::Gpl),
			"json" => Some(PaletteFormat::Json),
			_ => None
		}
	}
}

impl Display for PaletteFormat {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteFormat::Gpl => write!(f, "gpl"),
			PaletteFormat::Json => write!(f, "json"),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;

	#[test]
	fn subscription_ids_are_unique() {
		let mut pal = Palette::empty();
		let a = pal.subscribe(|_, _| {});
		let b = pal.subscribe(|_, _| {});
		assert_ne!(a, b);
		assert!(pal.unsubscribe(a));
		assert!(!pal.unsubscribe(a));
		assert!(pal.unsubscribe(b));
	}

	#[test]
	fn format_from_extension() {
		assert_eq!(PaletteFormat::guess("a/b/pico-8.GPL"), Some(PaletteFormat::Gpl));
		assert_eq!(PaletteFormat::guess("colors.json"), Some(PaletteFormat::Json));
		assert_eq!(PaletteFormat::guess("colors.act"), None);
		assert_eq!(PaletteFormat::guess("colors"), None);
	}

	#[test]
	fn palette_can_cross_threads() {
		fn assert_send<T: Send>() {}
		assert_send::<Palette>();

		static SHARED: Mutex<Option<Palette>> = Mutex::new(None);
		let handle = std::thread::spawn(|| {
			let mut pal = Palette::empty();
			pal.subscribe(|_, _| {});
			pal.add_color(Color::rgb(1, 2, 3));
			*SHARED.lock().unwrap() = Some(pal);
		});
		handle.join().unwrap();
		assert_eq!(SHARED.lock().unwrap().as_ref().map(Palette::len), Some(1));
	}

	#[test]
	fn clone_drops_observers() {
		let mut pal = Palette::default();
		pal.subscribe(|_, _| {});
		let copy = pal.clone();
		assert_eq!(copy, pal);
		assert!(format!("{copy:?}").contains("observers: 0"));
	}
}
