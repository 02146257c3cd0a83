use std::fs;
use std::path::PathBuf;

use pixpal::color::Color;
use pixpal::error::PaletteError;
use pixpal::palettes::Palette;

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/palettes/{name}"))
}

#[test]
fn gpl_writing() {
	let mut pal = Palette::from(vec![Color::rgb(255, 0, 0), Color::new(0, 128, 255, 0.5)]);
	pal.name = "Test".to_string();

	assert_eq!(pal.save_to_gpl(), [
		"GIMP Palette",
		"Channels: RGBA",
		"Name: Test",
		"#",
		"255   0   0 255 Color 1",
		"  0 128 255 128 Color 2",
		"",
	].join("\n"));

	let empty = Palette::empty();
	assert_eq!(empty.save_to_gpl(), "GIMP Palette\nChannels: RGBA\nName: Default\n#\n");
}

#[test]
fn gpl_round_trip() {
	let mut pal = Palette::default();
	pal.add_color(Color::new(10, 20, 30, 0.0));
	pal.add_color(Color::new(10, 20, 30, 0.33));
	pal.name = "Everything".to_string();

	let mut loaded = Palette::empty();
	assert!(loaded.load_from_gpl(&pal.save_to_gpl()));

	assert_eq!(loaded.name, "Everything");
	assert_eq!(loaded.len(), pal.len());
	for (i, (a, b)) in pal.colors().iter().zip(loaded.colors()).enumerate() {
		assert!(a.equals(b, 1.0 / 255.0), "{i}: {a} came back as {b}");
	}
}

#[test]
fn gpl_parsing_from_file() {
	let mut pal = Palette::default();
	assert!(pal.load_from_gpl_file(fixture("pico-8.gpl")).unwrap());

	assert_eq!(pal.name, "PICO-8");
	assert_eq!(pal.len(), 16);
	assert_eq!(pal.colors()[0], Color::rgb(0, 0, 0));
	assert_eq!(pal.colors()[15], Color::rgb(255, 204, 170));
	assert!(pal.colors().iter().all(|c| c.a() == 1.0));
}

#[test]
fn gpl_parsing_rgba_file() {
	let contents = fs::read_to_string(fixture("rgba.gpl")).unwrap();
	let pal = Palette::from_gpl_string(contents).unwrap();

	assert_eq!(pal.name, "Glass");
	assert_eq!(pal.colors(), &[
		Color::new(255, 0, 0, 1.0),
		Color::new(0, 255, 0, 128.0 / 255.0),
		Color::new(0, 0, 255, 0.0),
		Color::new(0, 0, 255, 0.0),
	], "duplicates in the file are kept");
}

#[test]
#[should_panic(expected = "MissingHeader")]
fn gpl_parsing_broken_file() {
	let contents = fs::read_to_string(fixture("broken.gpl")).unwrap();
	Palette::from_gpl_string(contents).unwrap();
}

#[test]
#[should_panic(expected = "NoColors")]
fn gpl_parsing_header_only() {
	Palette::from_gpl_string("GIMP Palette\nName: Nothing\n#\n").unwrap();
}

#[test]
fn gpl_failures_leave_palette_untouched() {
	for content in ["not a gpl file", "", "\n\n  \n", "GIMP Palette", "GIMP Palette\n# only comments\n1 2\n", "JASC-PAL\n0100\n1\n0 0 0\n"] {
		let mut pal = Palette::default();
		assert!(!pal.load_from_gpl(content), "{content:?} should be rejected");
		assert_eq!(pal, Palette::default(), "{content:?} changed the palette");
	}
}

fn colors_of(content: &str) -> Vec<Color> {
	Palette::from_gpl_string(content).unwrap().colors().to_vec()
}

#[test]
fn gpl_channel_detection() {
	// no Channels line: alpha column ignored
	assert_eq!(colors_of("GIMP Palette\n255 0 0 128 red\n"), vec![Color::rgb(255, 0, 0)]);

	// RGB only
	assert_eq!(colors_of("GIMP Palette\nChannels: RGB\n255 0 0 128\n"), vec![Color::rgb(255, 0, 0)]);

	// RGBA
	assert_eq!(colors_of("GIMP Palette\nChannels: RGBA\n255 0 0 51\n"), vec![Color::new(255, 0, 0, 0.2)]);

	// RGBA without an alpha column
	assert_eq!(colors_of("GIMP Palette\nChannels: RGBA\n255 0 0\n"), vec![Color::rgb(255, 0, 0)]);

	// a Channels line past the first five lines doesn't count
	let late = "GIMP Palette\nName: Late\nColumns: 4\n# a\n# b\nChannels: RGBA\n10 20 30 40\n";
	assert_eq!(colors_of(late), vec![Color::rgb(10, 20, 30)]);

	// blank lines don't count towards the five
	let spaced = "GIMP Palette\n\n\n\nName: Spaced\n\nColumns: 4\n# a\nChannels: RGBA\n10 20 30 51\n";
	assert_eq!(colors_of(spaced), vec![Color::new(10, 20, 30, 0.2)]);
}

#[test]
fn gpl_lenient_lines() {
	let content = [
		"GIMP Palette\r",
		"Channels: RGBA\r",
		"Name: Lenient",
		"#",
		"   1   2   3   4   name with spaces   ",
		"1 2",
		"a b c",
		"5 x 7",
		"300 -1 128 999",
		"8 9 10 nope",
		"\t11\t12\t13\t255",
		"14 15 16",
		"14 15 16",
		"",
	].join("\n");

	assert_eq!(colors_of(&content), vec![
		Color::new(1, 2, 3, 4.0 / 255.0),
		Color::new(255, 0, 128, 1.0),
		Color::new(11, 12, 13, 1.0),
		Color::new(14, 15, 16, 1.0),
		Color::new(14, 15, 16, 1.0),
	]);
}

#[test]
fn gpl_integer_prefixes() {
	// numbers are read up to the first non-digit
	assert_eq!(colors_of("GIMP Palette\n12abc 0.5 7e2\n"), vec![Color::rgb(12, 0, 7)]);
}

#[test]
fn gpl_non_ascii_digits() {
	assert!(matches!(Palette::parse_gpl("GIMP Palette\n١٢ 0 0\n"), Err(PaletteError::NoColors)));
	assert_eq!(colors_of("GIMP Palette\n١٢ 0 0\n3 4 5\n"), vec![Color::rgb(3, 4, 5)]);
}
