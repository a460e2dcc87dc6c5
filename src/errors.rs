use thiserror::Error;

macro_rules! root_errors {
    [$(
        $errname:ident : $msg:literal {
            $(
                //nested should not exist because all the errors are $var + "Kind"
                //but concat_ident!() isn't stable and doesn't work well
                $var:ident($nested:ident)
            ),*
        }

    ),*] => {
        $(
            #[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
            pub enum $errname {
                $(
                    #[error("{} -> {}: {0}", $msg, stringify!($var))]
                    $var($nested),
                )*
            }
        )*
    };
}

macro_rules! sub_errors {
    [$(
        $name:ident {
            $(
                $var:ident : $msg:literal
            ),*
        }
    ),*] => {
        $(
            #[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
            pub enum $name {
                $(
                    #[error($msg)]
                    $var,
                )*
            }
        )*
    }
}

root_errors![
    AddressError : "Error ocurred while deriving an address" {
        InvalidKeyFormat(KeyFormatErrorKind),
        ConfigNotInitialized(ConfigErrorKind),
        InvalidConfig(InvalidConfigErrorKind),
        EncodingError(EncodingErrorKind)
    }
];

sub_errors![
    KeyFormatErrorKind {
        PrivateKey: "malformed private key",
        PublicKey: "malformed public key"
    },
    ConfigErrorKind {
        NotInitialized: "chain config is not initialized",
        MissingScript: "script is missing from the chain config"
    },
    InvalidConfigErrorKind {
        AlreadyInitialized: "chain config is already initialized with other parameters",
        UnknownNetwork: "unknown network name"
    },
    EncodingErrorKind {
        CodeHash: "invalid code hash",
        HashType: "unrecognized hash type",
        Args: "invalid script args",
        Format: "invalid address payload",
        Prefix: "address prefix does not match the network",
        Checksum: "invalid address checksum"
    }
];

impl AddressError {
    pub fn is_invalid_key_format(&self) -> bool {
        matches!(self, AddressError::InvalidKeyFormat(_))
    }

    pub fn is_config_not_initialized(&self) -> bool {
        matches!(self, AddressError::ConfigNotInitialized(_))
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, AddressError::InvalidConfig(_))
    }

    pub fn is_encoding_error(&self) -> bool {
        matches!(self, AddressError::EncodingError(_))
    }
}
