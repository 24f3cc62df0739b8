use anyhow::{Result, anyhow, ensure};
use serde::Deserialize;
use slog::{Logger, error, info};
use std::fs;

#[derive(Deserialize, Debug, Clone)]
pub struct UeConfig {
    pub ue: UeData,
    pub amf: AmfConfig,
    pub cell: CellConfig,
    pub security: Option<SecurityConfig>,
    #[serde(default)]
    pub inputs: Inputs,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UeData {
    pub supi: String,
    /// IMEI as BCD digit bytes, e.g. from TS 23.003.
    #[serde(with = "hex")]
    pub imei: Vec<u8>,
    /// Long-term key K.
    #[serde(with = "hex")]
    pub ki: [u8; 16],
    #[serde(with = "hex")]
    pub opc: [u8; 16],
    /// Authentication management field.
    #[serde(with = "hex")]
    pub amf: [u8; 2],
    #[serde(with = "hex")]
    pub sqn: [u8; 6],
    pub ran_ue_ngap_id: u32,
    pub amf_ue_ngap_id: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AmfConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CellConfig {
    /// Mobile Country Code, three decimal digits.
    pub mcc: String,
    /// Mobile Network Code, two or three decimal digits.
    pub mnc: String,
    /// 36-bit NR cell identity, right-aligned.
    pub nr_cell_identity: u64,
    /// 24-bit tracking area code.
    pub tac: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SecurityConfig {
    #[serde(with = "hex")]
    pub knas_int: [u8; 16],
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Inputs {
    #[serde(default)]
    pub deregistration: DeregistrationInput,
    #[serde(default)]
    pub pdu_session_establishment: EstablishmentInput,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DeregistrationInput {
    pub switch_off: bool,
    pub re_registration_required: bool,
}

impl Default for DeregistrationInput {
    fn default() -> Self {
        DeregistrationInput {
            switch_off: false,
            re_registration_required: false,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct EstablishmentInput {
    pub pdu_session_id: u8,
    /// Requested PDU session type value, TS 24.501 9.11.4.11.  Omitted
    /// means the network chooses.
    pub pdu_session_type: Option<u8>,
    /// Requested SSC mode value, TS 24.501 9.11.4.16.
    pub ssc_mode: Option<u8>,
}

impl Default for EstablishmentInput {
    fn default() -> Self {
        EstablishmentInput {
            pdu_session_id: 1,
            pdu_session_type: Some(1),
            ssc_mode: Some(1),
        }
    }
}

/// Load the UE configuration from file into memory.
pub fn load_config_file(filename: &str, logger: &Logger) -> Result<UeConfig> {
    let path = std::env::current_dir()?;
    let contents = fs::read_to_string(filename).inspect_err(|e| {
        error!(
            logger,
            "Failed to load config file {filename} (current directory {}) with error code {e}",
            path.display()
        )
    })?;
    let config: UeConfig = toml::from_str(&contents)?;
    convert_mcc_mnc(&config.cell.mcc, &config.cell.mnc)?;
    info!(logger, "Loaded config for {} from {filename}", config.ue.supi);
    Ok(config)
}

/// Packs MCC + MNC digit strings into the 3-byte PLMN identity and
/// derives the serving network name.
pub fn convert_mcc_mnc(mcc: &str, mnc: &str) -> Result<([u8; 3], String)> {
    ensure!(mcc.len() == 3, "MCC must be three digits");
    ensure!(
        mnc.len() == 2 || mnc.len() == 3,
        "MNC must be two or three digits"
    );
    let mut digits = mcc
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .ok_or(anyhow!("MCC contained a non digit"))?;
    if mnc.len() == 2 {
        digits.push(0x0f)
    };
    let mut mnc_digits = mnc
        .chars()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<_>>>()
        .ok_or(anyhow!("MNC contained a non digit"))?;
    digits.append(&mut mnc_digits);

    let mut plmn = [0u8; 3];
    for ii in 0..3 {
        plmn[ii] = ((digits[ii * 2 + 1] << 4) | (digits[ii * 2])) as u8
    }

    let serving_network_name = format!("5G:mnc{:0>3}.mcc{}.3gppnetwork.org", mnc, mcc);
    Ok((plmn, serving_network_name))
}
