//! Constants for Diffie-Hellman over prime-field multiplicative groups

/// A multiplicative subgroup of integers modulo a prime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModpGroupConstants {
    /// Human-readable name
    pub name: &'static str,
    /// Prime modulus `p`, hexadecimal
    pub p: &'static str,
    /// Prime order `q` of the subgroup, hexadecimal
    pub q: &'static str,
    /// Generator of the order-`q` subgroup, hexadecimal
    pub g: &'static str,
}

/// RFC 3526 MODP Group 14 (2048-bit safe prime)
///
/// `p = 2^2048 - 2^1984 - 1 + 2^64 * ([2^1918 pi] + 124476)`, `q = (p - 1) / 2`.
/// The generator 2 is a quadratic residue mod `p` and generates the order-`q`
/// subgroup.
pub const RFC3526_MODP_2048: ModpGroupConstants = ModpGroupConstants {
    name: "RFC 3526 MODP-2048",
    p: "FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD1\
        29024E088A67CC74020BBEA63B139B22514A08798E3404DD\
        EF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245\
        E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7ED\
        EE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3D\
        C2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F\
        83655D23DCA3AD961C62F356208552BB9ED529077096966D\
        670C354E4ABC9804F1746C08CA18217C32905E462E36CE3B\
        E39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9\
        DE2BCBF6955817183995497CEA956AE515D2261898FA0510\
        15728E5A8AACAA68FFFFFFFFFFFFFFFF",
    q: "7FFFFFFFFFFFFFFFE487ED5110B4611A62633145C06E0E68\
        948127044533E63A0105DF531D89CD9128A5043CC71A026E\
        F7CA8CD9E69D218D98158536F92F8A1BA7F09AB6B6A8E122\
        F242DABB312F3F637A262174D31BF6B585FFAE5B7A035BF6\
        F71C35FDAD44CFD2D74F9208BE258FF324943328F6722D9E\
        E1003E5C50B1DF82CC6D241B0E2AE9CD348B1FD47E9267AF\
        C1B2AE91EE51D6CB0E3179AB1042A95DCF6A9483B84B4B36\
        B3861AA7255E4C0278BA3604650C10BE19482F23171B671D\
        F1CF3B960C074301CD93C1D17603D147DAE2AEF837A62964\
        EF15E5FB4AAC0B8C1CCAA4BE754AB5728AE9130C4C7D0288\
        0AB9472D455655347FFFFFFFFFFFFFFF",
    g: "02",
};

/// Toy group: the quadratic residues modulo 23, of order 11
///
/// Far too small for any real use; sized so every element can be listed
/// in a test.
pub const TEST_MODP_23: ModpGroupConstants = ModpGroupConstants {
    name: "test MODP-23",
    p: "17",
    q: "0B",
    g: "02",
};
