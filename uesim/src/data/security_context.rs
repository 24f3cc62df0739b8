use aes::Aes128;
use cmac::{Cmac, Mac};
use nas::{NasMessage, SecurityHeader, SecurityHeaderType};

// TS33.501, 6.4.3.1: BEARER is the NAS connection identifier.
const NAS_CONNECTION_IDENTIFIER: u8 = 1;
const DIRECTION_UPLINK: u8 = 0;

/// Uplink NAS integrity state for one UE.
#[derive(Clone, Debug)]
pub struct NasSecurityContext {
    knas_int: [u8; 16],
    ul_count: u32,
}

impl NasSecurityContext {
    pub fn new(knas_int: [u8; 16]) -> Self {
        NasSecurityContext {
            knas_int,
            ul_count: 0,
        }
    }

    /// Wraps a plain message in a security-protected outer header.
    ///
    /// The integrity value is NIA2 over the sequence number followed by
    /// the encoded inner message.
    pub fn protect(&mut self, inner: NasMessage) -> Result<NasMessage, nas::NasError> {
        let security_header_type = if self.ul_count == 0 {
            SecurityHeaderType::IntegrityProtectedWithNewSecurityContext
        } else {
            SecurityHeaderType::IntegrityProtected
        };
        let sequence_number = (self.ul_count & 0xff) as u8;

        let inner_bytes = nas::encode(&inner)?;
        let mut mac_input = Vec::with_capacity(1 + inner_bytes.len());
        mac_input.push(sequence_number);
        mac_input.extend_from_slice(&inner_bytes);
        let mac = calculate_nia2_mac(
            &self.knas_int,
            self.ul_count.to_be_bytes(),
            NAS_CONNECTION_IDENTIFIER,
            DIRECTION_UPLINK,
            &mac_input,
        );

        self.ul_count = (self.ul_count + 1) & 0xffffff;
        Ok(NasMessage::SecurityProtected(
            SecurityHeader {
                security_header_type,
                sequence_number,
                message_authentication_code: mac,
            },
            Box::new(inner),
        ))
    }
}

// TS33.401, B.2.3
pub fn calculate_nia2_mac(
    integrity_key: &[u8; 16],
    count: [u8; 4],
    bearer_identity_5bit: u8,
    direction_1bit: u8,
    message: &[u8],
) -> [u8; 4] {
    // M = COUNT(32) | BEARER(5) | DIRECTION(1) | 26 zero bits | MESSAGE.
    // The first 32 bits of the CMAC tag are the MAC.
    let mut mac = Cmac::<Aes128>::new_from_slice(integrity_key)
        .unwrap_or_else(|_| unreachable!("Aes128 CMAC accepts 16-byte keys"));
    mac.update(&count);
    mac.update(&[(bearer_identity_5bit << 3) | (direction_1bit << 2)]);
    mac.update(&[0u8; 3]);
    mac.update(message);
    let output = mac.finalize().into_bytes();
    output.as_slice()[0..4]
        .try_into()
        .unwrap_or_else(|_| unreachable!("CMAC tag is 16 bytes"))
}
