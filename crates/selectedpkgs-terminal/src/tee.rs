//! Writer that duplicates log output, used for logging to a file and the console at once.

use std::io::Write;

pub struct Tee<A, B> {
	first: A,
	second: B,
}

impl<A: Write, B: Write> Tee<A, B> {
	pub fn new(first: A, second: B) -> Self {
		Self { first, second }
	}
}

impl<A: Write, B: Write> Write for Tee<A, B> {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		self.first.write_all(buf)?;
		self.second.write_all(buf)?;
		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		self.first.flush()?;
		self.second.flush()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn writes_reach_both() {
		let mut tee = Tee::new(Vec::<u8>::new(), Vec::<u8>::new());
		write!(tee, "hello {}", 1).unwrap();
		tee.flush().unwrap();
		assert_eq!(tee.first, b"hello 1");
		assert_eq!(tee.second, b"hello 1");
	}
}
