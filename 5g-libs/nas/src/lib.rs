//! NAS (Non-Access-Stratum) message codec for the 5GS mobility and
//! session management protocols, TS 24.501.
//!
//! Messages are built from ordered information elements with
//! mandatory/optional/extension presence rules; `decode(encode(m)) == m`
//! holds for every well-formed message.

mod codec;
mod enums;
mod errors;
mod ies;
mod messages;

pub use codec::{decode, encode};
pub use enums::{
    AccessType, ExtendedProtocolDiscriminator, IdentityType, MmMessageType, PduSessionType,
    SecurityHeaderType, SmCause, SmMessageType, SscMode, TypeOfSecurityContext,
};
pub use errors::NasError;
pub use ies::{DeregistrationType, MobileIdentity, NasKeySetIdentifier};
pub use messages::{
    DeregistrationAcceptUeOriginating, DeregistrationRequestUeOriginating, IdentityRequest,
    IdentityResponse, MmMessage, NasMessage, PduSessionEstablishmentAccept,
    PduSessionEstablishmentRequest, SecurityHeader, SmHeader, SmMessage,
};
