//! Protocol enumeration registries.
//!
//! Each family is a closed sum type carrying its wire value and a display
//! name, with a `from_value` reverse lookup that fails with
//! [`NasError::UnknownValue`] for unregistered values. Values are unique
//! within a family by construction (the match arms would not compile
//! otherwise).

use crate::errors::NasError;
use std::fmt;

macro_rules! protocol_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($family:literal) {
            $($variant:ident = $value:literal => $display:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const fn value(self) -> u8 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)+
                }
            }

            pub fn from_value(value: u8) -> Result<Self, NasError> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(NasError::UnknownValue {
                        family: $family,
                        value,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

protocol_enum! {
    /// TS 24.007, table 11.2.3.1A.1
    ExtendedProtocolDiscriminator ("extended protocol discriminator") {
        MobilityManagement = 0x7e => "5GS mobility management messages",
        SessionManagement = 0x2e => "5GS session management messages",
    }
}

protocol_enum! {
    /// TS 24.501, table 9.3.1
    SecurityHeaderType ("security header type") {
        NotProtected = 0x00 => "Not protected",
        IntegrityProtected = 0x01 => "Integrity protected",
        IntegrityProtectedAndCiphered = 0x02 => "Integrity protected and ciphered",
        IntegrityProtectedWithNewSecurityContext = 0x03 =>
            "Integrity protected with new 5G NAS security context",
        IntegrityProtectedAndCipheredWithNewSecurityContext = 0x04 =>
            "Integrity protected and ciphered with new 5G NAS security context",
    }
}

impl SecurityHeaderType {
    pub fn is_protected(self) -> bool {
        self != SecurityHeaderType::NotProtected
    }
}

protocol_enum! {
    /// TS 24.501, table 9.7 (5GMM subset)
    MmMessageType ("5GMM message type") {
        RegistrationRequest = 0x41 => "Registration Request",
        RegistrationAccept = 0x42 => "Registration Accept",
        DeregistrationRequestUeOriginating = 0x45 =>
            "De-registration Request (UE originating)",
        DeregistrationAcceptUeOriginating = 0x46 =>
            "De-registration Accept (UE originating)",
        AuthenticationRequest = 0x56 => "Authentication Request",
        AuthenticationResponse = 0x57 => "Authentication Response",
        IdentityRequest = 0x5b => "Identity Request",
        IdentityResponse = 0x5c => "Identity Response",
        SecurityModeCommand = 0x5d => "Security Mode Command",
        SecurityModeComplete = 0x5e => "Security Mode Complete",
    }
}

protocol_enum! {
    /// TS 24.501, table 9.7 (5GSM subset)
    SmMessageType ("5GSM message type") {
        PduSessionEstablishmentRequest = 0xc1 => "PDU Session Establishment Request",
        PduSessionEstablishmentAccept = 0xc2 => "PDU Session Establishment Accept",
        PduSessionEstablishmentReject = 0xc3 => "PDU Session Establishment Reject",
        PduSessionReleaseRequest = 0xd1 => "PDU Session Release Request",
        PduSessionReleaseCommand = 0xd3 => "PDU Session Release Command",
    }
}

protocol_enum! {
    /// TS 24.501, 9.11.3.3
    IdentityType ("identity type") {
        Suci = 0x01 => "SUCI",
        Guti = 0x02 => "5G-GUTI",
        Imei = 0x03 => "IMEI",
        FivegSTmsi = 0x04 => "5G-S-TMSI",
        Imeisv = 0x05 => "IMEISV",
    }
}

protocol_enum! {
    /// TS 24.501, 9.11.3.32
    TypeOfSecurityContext ("type of security context") {
        Native = 0x00 => "native security context",
        Mapped = 0x01 => "mapped security context",
    }
}

protocol_enum! {
    /// TS 24.501, 9.11.3.20 (access type bits of the de-registration type)
    AccessType ("access type") {
        Threegpp = 0x01 => "3GPP access",
        NonThreegpp = 0x02 => "non-3GPP access",
        ThreegppAndNonThreegpp = 0x03 => "3GPP access and non-3GPP access",
    }
}

protocol_enum! {
    /// TS 24.501, 9.11.4.11
    PduSessionType ("PDU session type") {
        Ipv4 = 0x01 => "IPv4",
        Ipv6 = 0x02 => "IPv6",
        Ipv4v6 = 0x03 => "IPv4v6",
        Unstructured = 0x04 => "Unstructured",
        Ethernet = 0x05 => "Ethernet",
    }
}

protocol_enum! {
    /// TS 24.501, 9.11.4.16
    SscMode ("SSC mode") {
        Ssc1 = 0x01 => "SSC mode 1",
        Ssc2 = 0x02 => "SSC mode 2",
        Ssc3 = 0x03 => "SSC mode 3",
    }
}

protocol_enum! {
    /// TS 24.501, table 9.11.4.2.1 (subset)
    SmCause ("5GSM cause") {
        InsufficientResources = 0x1a => "Insufficient resources",
        MissingOrUnknownDnn = 0x1b => "Missing or unknown DNN",
        UnknownPduSessionType = 0x1c => "Unknown PDU session type",
        RegularDeactivation = 0x24 => "Regular deactivation",
        PduSessionTypeIpv4OnlyAllowed = 0x32 => "PDU session type IPv4 only allowed",
    }
}
