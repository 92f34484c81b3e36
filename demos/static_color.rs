//! Set all four strips from hex colors given on the command line.
//!
//! Usage: `static_color <serial-device> <color0> <color1> <color2> <color3>`

use eyre::{bail, Context, Result};
use quadled::{Color, Command, SerialTransport, Session};

fn main() -> Result<()> {
	color_eyre::install()?;
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.init();

	let args: Vec<String> = std::env::args().skip(1).collect();
	let [device, hex @ ..] = args.as_slice() else {
		bail!("usage: static_color <serial-device> <color0> <color1> <color2> <color3>");
	};

	if hex.len() != 4 {
		bail!("expected 4 colors, got {}", hex.len());
	}

	let mut colors = [Color::default(); 4];
	for (slot, arg) in colors.iter_mut().zip(hex) {
		*slot = Color::from_hex(arg).wrap_err_with(|| format!("parsing {arg:?}"))?;
	}

	let mut session = Session::new();
	session.attach(SerialTransport::open(device).wrap_err("opening serial device")?);

	let outcome = session.send(&Command::static_color(colors))?;
	println!("{outcome:?}");

	Ok(())
}
