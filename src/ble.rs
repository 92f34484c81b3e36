//! Characteristic-write transport for the controller's BLE UART bridge.
//!
//! Device scanning, connection and service discovery stay with the caller;
//! this module only drives an already-connected peripheral. The bridge
//! accepts at most 20 bytes per write, so this transport is normally wrapped
//! in [`crate::tokio::Chunked`].

use async_trait::async_trait;
use btleplug::{
	api::{Characteristic, Peripheral as _, WriteType},
	platform::Peripheral,
};
use quadled_shared::BLE_CHARACTERISTIC_UUID;
use uuid::Uuid;

use crate::{tokio::AsyncTransport, TransportError};

/// The UUID of the writable command characteristic.
pub fn characteristic_uuid() -> Uuid {
	Uuid::from_u128(BLE_CHARACTERISTIC_UUID)
}

/// Locate the command characteristic among a peripheral's discovered services.
///
/// Returns `None` if the peripheral does not expose the UART bridge
/// characteristic (or services have not been discovered yet).
pub fn find_characteristic(peripheral: &Peripheral) -> Option<Characteristic> {
	let uuid = characteristic_uuid();

	peripheral
		.characteristics()
		.into_iter()
		.find(|c| c.uuid == uuid)
}

/// Writes command bytes to a connected peripheral's command characteristic.
pub struct CharacteristicTransport {
	peripheral:     Peripheral,
	characteristic: Characteristic,
}

impl CharacteristicTransport {
	pub fn new(peripheral: Peripheral, characteristic: Characteristic) -> Self {
		Self {
			peripheral,
			characteristic,
		}
	}
}

#[async_trait]
impl AsyncTransport for CharacteristicTransport {
	async fn send(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
		self.peripheral
			.write(&self.characteristic, bytes, WriteType::WithoutResponse)
			.await?;

		Ok(())
	}
}
