use std::{
	io,
	sync::{Arc, Mutex},
	time::{Duration, Instant},
};

use quadled::{Chunked, Color, Command, SendOutcome, Session, Transport, TransportError};

/// Records every write; optionally starts failing at a given write index.
#[derive(Clone, Default)]
struct MockTransport {
	writes:     Arc<Mutex<Vec<Vec<u8>>>>,
	fail_after: Option<usize>,
}

impl MockTransport {
	fn new() -> Self {
		Self::default()
	}

	fn failing_after(writes: usize) -> Self {
		Self {
			fail_after: Some(writes),
			..Self::default()
		}
	}

	fn writes(&self) -> Vec<Vec<u8>> {
		self.writes.lock().unwrap().clone()
	}
}

impl Transport for MockTransport {
	fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
		let mut writes = self.writes.lock().unwrap();

		if self.fail_after.is_some_and(|n| writes.len() >= n) {
			return Err(TransportError::Io(io::Error::new(
				io::ErrorKind::BrokenPipe,
				"link dropped",
			)));
		}

		writes.push(bytes.to_vec());
		Ok(())
	}
}

#[test]
fn chunked_splits_into_paced_writes() {
	let mock = MockTransport::new();
	let mut chunked = Chunked::with_pacing(mock.clone(), 20, Duration::ZERO);

	chunked.send(&[0xAA; 130]).unwrap();

	let writes = mock.writes();
	assert_eq!(writes.len(), 7);
	assert!(writes[..6].iter().all(|w| w.len() == 20));
	assert_eq!(writes[6].len(), 10);
	assert_eq!(writes.concat(), vec![0xAA; 130]);
}

#[test]
fn chunked_sends_short_buffers_in_one_write() {
	let mock = MockTransport::new();
	let mut chunked = Chunked::with_pacing(mock.clone(), 20, Duration::ZERO);

	chunked.send(&[1, 2, 3]).unwrap();

	assert_eq!(mock.writes(), vec![vec![1, 2, 3]]);
}

#[test]
fn chunked_waits_between_chunks_but_not_after_the_last() {
	let mock = MockTransport::new();
	let delay = Duration::from_millis(10);
	let mut chunked = Chunked::with_pacing(mock.clone(), 20, delay);

	let start = Instant::now();
	chunked.send(&[0u8; 130]).unwrap();
	let elapsed = start.elapsed();

	// 7 chunks, 6 pauses.
	assert!(elapsed >= delay * 6, "elapsed {elapsed:?}");
	assert_eq!(mock.writes().len(), 7);
}

#[test]
fn chunked_aborts_on_the_first_failed_chunk() {
	let mock = MockTransport::failing_after(3);
	let mut chunked = Chunked::with_pacing(mock.clone(), 20, Duration::ZERO);

	let result = chunked.send(&[0u8; 130]);

	assert!(result.is_err());
	// The three successful chunks went out; nothing after the failure.
	assert_eq!(mock.writes().len(), 3);
}

#[test]
fn empty_session_reports_nothing_sent() {
	let mut session = Session::new();

	let outcome = session.send(&Command::start_playback()).unwrap();

	assert_eq!(outcome, SendOutcome::NothingSent);
}

#[test]
fn session_mirrors_to_every_attached_transport() {
	let wired = MockTransport::new();
	let wireless = MockTransport::new();

	let mut session = Session::new();
	session.attach(wired.clone());
	session.attach(Chunked::with_pacing(wireless.clone(), 20, Duration::ZERO));

	let command = Command::static_color([Color::new(1, 2, 3); 4]);
	let outcome = session.send(&command).unwrap();

	assert_eq!(outcome, SendOutcome::Sent { transports: 2 });
	assert_eq!(wired.writes(), vec![command.as_bytes().to_vec()]);
	assert_eq!(wireless.writes().concat(), command.as_bytes());
}

#[test]
fn session_drives_remaining_transports_after_a_failure() {
	let broken = MockTransport::failing_after(0);
	let healthy = MockTransport::new();

	let mut session = Session::new();
	session.attach(broken);
	session.attach(healthy.clone());

	let command = Command::stop_playback();
	let result = session.send(&command);

	assert!(result.is_err());
	assert_eq!(healthy.writes(), vec![command.as_bytes().to_vec()]);
}

#[test]
fn timeouts_are_reported_distinctly() {
	let e: TransportError = io::Error::new(io::ErrorKind::TimedOut, "stalled").into();
	assert!(matches!(e, TransportError::Timeout));

	let e: TransportError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
	assert!(matches!(e, TransportError::Io(_)));
}
