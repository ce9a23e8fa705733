//! Constants for elliptic-curve Diffie-Hellman

/// Which curve equation the coefficients `a` and `b` belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveForm {
    /// Short Weierstrass: `y^2 = x^3 + a*x + b`
    Weierstrass,
    /// Montgomery: `b*y^2 = x^3 + a*x^2 + x`
    Montgomery,
}

/// Domain parameters of an elliptic curve over a prime field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Human-readable name
    pub name: &'static str,
    /// Equation the coefficients belong to
    pub form: CurveForm,
    /// Field prime `p`, hexadecimal
    pub p: &'static str,
    /// Coefficient `a`, hexadecimal, reduced into `[0, p)`
    pub a: &'static str,
    /// Coefficient `b`, hexadecimal, reduced into `[0, p)`
    pub b: &'static str,
    /// Generator x-coordinate, hexadecimal
    pub g_x: &'static str,
    /// Generator y-coordinate, hexadecimal
    pub g_y: &'static str,
    /// Prime order of the generator, hexadecimal
    pub n: &'static str,
    /// Cofactor
    pub h: u32,
}

/// NIST P-256 (FIPS 186-4, D.1.2.3), also known as secp256r1
pub const NIST_P256: CurveConstants = CurveConstants {
    name: "NIST P-256",
    form: CurveForm::Weierstrass,
    p: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFF",
    a: "FFFFFFFF00000001000000000000000000000000FFFFFFFFFFFFFFFFFFFFFFFC",
    b: "5AC635D8AA3A93E7B3EBBD55769886BC651D06B0CC53B0F63BCE3C3E27D2604B",
    g_x: "6B17D1F2E12C4247F8BCE6E563A440F277037D812DEB33A0F4A13945D898C296",
    g_y: "4FE342E2FE1A7F9B8EE7EB4A7C0F9E162BCE33576B315ECECBB6406837BF51F5",
    n: "FFFFFFFF00000000FFFFFFFFFFFFFFFFBCE6FAADA7179E84F3B9CAC2FC632551",
    h: 1,
};

/// secp256k1 (SEC 2, 2.4.1)
pub const SECP256K1: CurveConstants = CurveConstants {
    name: "secp256k1",
    form: CurveForm::Weierstrass,
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "00",
    b: "07",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    h: 1,
};

/// Curve25519 in Montgomery form (RFC 7748, 4.1)
pub const CURVE25519: CurveConstants = CurveConstants {
    name: "Curve25519",
    form: CurveForm::Montgomery,
    p: "7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFED",
    a: "076D06",
    b: "01",
    g_x: "09",
    g_y: "20AE19A1B8A086B4E01EDD2C7748D14C923D4D7E6D7C61B229E9C5A27ECED3D9",
    n: "1000000000000000000000000000000014DEF9DEA2F79CD65812631A5CF5D3ED",
    h: 8,
};

/// Toy Weierstrass curve `y^2 = x^3 - 2x + 9` over F_23 with 22 points
pub const TEST_WEIERSTRASS_23: CurveConstants = CurveConstants {
    name: "test Weierstrass-23",
    form: CurveForm::Weierstrass,
    p: "17",
    a: "15",
    b: "09",
    g_x: "05",
    g_y: "03",
    n: "0B",
    h: 2,
};

/// Toy Montgomery curve `3y^2 = x^3 + 4x^2 + x` over F_41 with 44 points
pub const TEST_MONTGOMERY_41: CurveConstants = CurveConstants {
    name: "test Montgomery-41",
    form: CurveForm::Montgomery,
    p: "29",
    a: "04",
    b: "03",
    g_x: "07",
    g_y: "0A",
    n: "0B",
    h: 4,
};
