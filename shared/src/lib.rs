#![no_std]

//! Wire-protocol constants shared between the host library and the firmware.
//!
//! The controller multiplexes command opcodes and color data in the same byte
//! stream, so the five opcode values double as a reserved band that must never
//! appear as a raw color channel value.

/// Number of physical LED strips driven by the controller.
pub const STRIP_COUNT: usize = 4;
/// Wire bytes per strip color (one per channel).
pub const CHANNELS_PER_STRIP: usize = 3;
/// Wire bytes per animation frame.
pub const FRAME_SIZE: usize = STRIP_COUNT * CHANNELS_PER_STRIP;

/// Maximum number of frames the firmware can store in its pattern buffer.
pub const MAX_FRAMES: usize = 60;

/// Largest possible command buffer (pattern upload with a full buffer).
pub const MAX_COMMAND_SIZE: usize = 2 + FRAME_SIZE * MAX_FRAMES;

/// Set all four strips to a static color; stops playback. 12 payload bytes.
pub const STATIC_COLOR_COMMAND: u8 = 0xFF;
/// Upload a pattern and start playback. 1 count byte + 12 bytes per frame.
pub const UPLOAD_PATTERN_COMMAND: u8 = 0xFE;
/// Set playback speed. 1 payload byte.
pub const SET_SPEED_COMMAND: u8 = 0xFD;
/// Restart playback of the stored pattern. No payload.
pub const START_PLAYBACK_COMMAND: u8 = 0xFC;
/// Stop playback, freezing the current output. No payload.
pub const STOP_PLAYBACK_COMMAND: u8 = 0xFB;

/// First byte value reserved for opcodes.
pub const RESERVED_BAND_START: u8 = STOP_PLAYBACK_COMMAND;
/// Largest channel value that may appear on the wire.
pub const MAX_CHANNEL_VALUE: u8 = RESERVED_BAND_START - 1;

/// Per-position permutation of (r, g, b) into wire byte order.
///
/// The board routes the strip connectors to different port pins, so the
/// channel order is not uniform across positions: g,r,b / g,r,b / r,b,g /
/// b,r,g. Firmware and host must agree on this table exactly.
pub const CHANNEL_ORDER: [[usize; CHANNELS_PER_STRIP]; STRIP_COUNT] =
	[[1, 0, 2], [1, 0, 2], [0, 2, 1], [2, 0, 1]];

/// Slowest playback speed accepted by the firmware.
pub const MIN_SPEED: u8 = 1;
/// Fastest playback speed accepted by the firmware.
pub const MAX_SPEED: u8 = 10;

/// Serial link baud rate.
pub const BAUD_RATE: u32 = 115_200;

/// UART service exposed by the controller's BLE bridge module.
pub const BLE_SERVICE_UUID: u128 = 0x0000ffe0_0000_1000_8000_00805f9b34fb;
/// Writable characteristic carrying the command stream.
pub const BLE_CHARACTERISTIC_UUID: u128 = 0x0000ffe1_0000_1000_8000_00805f9b34fb;

/// Largest write the BLE bridge accepts in one characteristic value.
pub const DEFAULT_CHUNK_SIZE: usize = 20;
/// Pause between consecutive chunks so the bridge's buffer can drain.
pub const INTER_CHUNK_DELAY_MS: u64 = 100;
