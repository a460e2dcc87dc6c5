pub type Hash = [u8; 32];
pub type PrivateKeyBytes = [u8; 32];
pub type PublicKeyBytes = [u8; 33];
pub type Blake160 = [u8; 20];
pub type Address = String;
