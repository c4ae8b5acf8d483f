use fixed_hash::construct_fixed_hash;

construct_fixed_hash! {
    /// 20-byte account address.
    pub struct B160(20);
}

construct_fixed_hash! {
    /// 32-byte EVM word.
    pub struct B256(32);
}

impl From<B160> for B256 {
    /// Right-aligns the address in a word, the way it sits in call-data.
    fn from(address: B160) -> Self {
        let mut word = B256::zero();
        word[12..].copy_from_slice(address.as_bytes());
        word
    }
}
