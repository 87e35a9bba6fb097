//! The SRP-6 participant state machine: verifier, salted identity hash, public keys,
//! scrambler, and session key, derived via large-integer modular exponentiation, with
//! the ordering rules that make client and server agree on `K`.
//!
//! Modeled as a single [`Participant`] value carrying a [`Role`] tag rather than a
//! client/server inheritance hierarchy -- the "getter" surface the reference's base
//! class provides compresses to direct field reads.

use rand::{CryptoRng, RngCore};
use tracing::instrument;
use zeroize::Zeroize;

use crate::bigint::Bigint;
use crate::config::{SrpParams, MULTIPLIER};
use crate::error::SrpError;
use crate::keccak::sha3_256;

/// Which side of the exchange a [`Participant`] plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Client,
    Server,
}

/// The three observable states a participant passes through. Transitions are one-way:
/// `Initialized -> KeyDerived -> Terminal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Initialized,
    KeyDerived,
    Terminal,
}

/// A single SRP-6 participant, either client or server.
///
/// Construction draws randomness once per field; the session-key transition
/// ([`Participant::compute_session_key`] on the server, [`Participant::set_session_key`]
/// on the client) runs exactly once. After that the value is read-only.
#[derive(Debug)]
pub struct Participant {
    role: Role,
    state: State,
    n: Bigint,
    g: Bigint,
    k: Bigint,
    salt: Bigint,
    x: Bigint,
    v: Option<Bigint>,
    private_key: Bigint,
    public_key: Bigint,
    scrambler: Option<Bigint>,
    session_key: Option<Bigint>,
}

impl Participant {
    /// Constructs a server participant: draws its own salt and scrambler, derives the
    /// verifier from `identity_hash`, and computes its public key `B`.
    #[instrument(skip(rng), fields(role = "server"))]
    pub fn new_server<R: RngCore + CryptoRng>(
        identity_hash: &[u8; 32],
        n_hex: &str,
        params: &SrpParams,
        rng: &mut R,
    ) -> Result<Self, SrpError> {
        let n = Bigint::from_hex(n_hex)?;
        let g = Bigint::from_u64(params.g);
        let k = Bigint::from_u64(MULTIPLIER);
        check_positive(&n, "N")?;
        check_positive(&g, "g")?;
        if !n.gt(&g) {
            return Err(SrpError::InvalidConfiguration("g must be less than N"));
        }

        let salt = draw_positive(params.salt_bits, rng)?;
        let scrambler = draw_positive(params.scrambler_bits, rng)?;
        let x = h_srp(&salt, identity_hash);
        let v = g.modpow(&x, &n);
        let b = draw_positive(params.server_private_bits, rng)?;
        let public_key = k.mul(&v).add(&g.modpow(&b, &n)).reduce(&n);

        tracing::debug!(public_key = %public_key.to_hex(), "server initialized");

        Ok(Participant {
            role: Role::Server,
            state: State::Initialized,
            n,
            g,
            k,
            salt,
            x,
            v: Some(v),
            private_key: b,
            public_key,
            scrambler: Some(scrambler),
            session_key: None,
        })
    }

    /// Constructs a client participant from the salt received from the server.
    #[instrument(skip(rng), fields(role = "client"))]
    pub fn new_client<R: RngCore + CryptoRng>(
        identity_hash: &[u8; 32],
        n_hex: &str,
        salt: Bigint,
        params: &SrpParams,
        rng: &mut R,
    ) -> Result<Self, SrpError> {
        let n = Bigint::from_hex(n_hex)?;
        let g = Bigint::from_u64(params.g);
        let k = Bigint::from_u64(MULTIPLIER);
        check_positive(&n, "N")?;
        check_positive(&g, "g")?;
        check_positive(&salt, "salt")?;
        if !n.gt(&g) {
            return Err(SrpError::InvalidConfiguration("g must be less than N"));
        }

        let a = draw_positive(params.client_private_bits, rng)?;
        let public_key = g.modpow(&a, &n);
        let x = h_srp(&salt, identity_hash);

        tracing::debug!(public_key = %public_key.to_hex(), "client initialized");

        Ok(Participant {
            role: Role::Client,
            state: State::Initialized,
            n,
            g,
            k,
            salt,
            x,
            v: None,
            private_key: a,
            public_key,
            scrambler: None,
            session_key: None,
        })
    }

    /// Server-side key completion: `K = (A * v^u mod N)^b mod N`. Requires [`Role::Server`]
    /// and [`State::Initialized`].
    #[instrument(skip(self, client_public), fields(role = ?self.role))]
    pub fn compute_session_key(&mut self, client_public: &Bigint) -> Result<(), SrpError> {
        self.require_role(Role::Server)?;
        self.require_state(State::Initialized)?;

        let v = self.v.as_ref().expect("server participant always has a verifier");
        let u = self.scrambler.as_ref().expect("server participant always has a scrambler");
        let v_u = v.modpow(u, &self.n);
        let base = client_public.mul(&v_u);
        let key = base.modpow(&self.private_key, &self.n);

        tracing::debug!("server derived session key");
        self.session_key = Some(key);
        self.state = State::KeyDerived;
        Ok(())
    }

    /// Client-side key completion: `K = (B - k*g^x)^(a + u*x) mod N`, reducing the base
    /// into `[0, N)` (handled internally by [`Bigint::modpow`]) before exponentiation.
    /// Requires [`Role::Client`] and [`State::Initialized`].
    #[instrument(skip(self, server_public, scrambler), fields(role = ?self.role))]
    pub fn set_session_key(
        &mut self,
        server_public: &Bigint,
        scrambler: &Bigint,
    ) -> Result<(), SrpError> {
        self.require_role(Role::Client)?;
        self.require_state(State::Initialized)?;
        check_positive(scrambler, "scrambler")?;

        let gx = self.g.modpow(&self.x, &self.n);
        let k_gx = self.k.mul(&gx);
        let base = server_public.sub(&k_gx);
        let exponent = self.private_key.add(&scrambler.mul(&self.x));
        let key = base.modpow(&exponent, &self.n);

        tracing::debug!("client derived session key");
        self.scrambler = Some(scrambler.clone());
        self.session_key = Some(key);
        self.state = State::KeyDerived;
        Ok(())
    }

    /// Transitions `KeyDerived -> Terminal`, marking the participant definitively
    /// read-only. Idempotent once `Terminal`.
    pub fn finalize(&mut self) -> Result<(), SrpError> {
        match self.state {
            State::Initialized => {
                Err(SrpError::InvalidConfiguration("cannot finalize before key derivation"))
            }
            State::KeyDerived => {
                self.state = State::Terminal;
                Ok(())
            }
            State::Terminal => Ok(()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn public_key(&self) -> &Bigint {
        &self.public_key
    }

    pub fn salt(&self) -> &Bigint {
        &self.salt
    }

    /// The scrambler, present on the server immediately and on the client only after
    /// [`Participant::set_session_key`].
    pub fn scrambler(&self) -> Option<&Bigint> {
        self.scrambler.as_ref()
    }

    /// The verifier, present on the server only.
    pub fn verifier(&self) -> Option<&Bigint> {
        self.v.as_ref()
    }

    pub fn session_key(&self) -> Option<&Bigint> {
        self.session_key.as_ref()
    }

    fn require_role(&self, expected: Role) -> Result<(), SrpError> {
        if self.role != expected {
            return Err(SrpError::InvalidConfiguration("wrong role for this operation"));
        }
        Ok(())
    }

    fn require_state(&self, expected: State) -> Result<(), SrpError> {
        if self.state != expected {
            return Err(SrpError::InvalidConfiguration("participant is not in the expected state"));
        }
        Ok(())
    }
}

impl Drop for Participant {
    fn drop(&mut self) {
        self.x = Bigint::zero();
        self.private_key = Bigint::zero();
        if let Some(key) = self.session_key.take() {
            drop(key);
        }
    }
}

/// `SHA3-256("{username}:{password}")`, encoded as UTF-16LE before hashing. This
/// encoding is unusual but must be reproduced exactly to interoperate with other
/// implementations of this protocol family.
pub fn identity_hash(username: &str, password: &str) -> [u8; 32] {
    let mut combined = String::with_capacity(username.len() + password.len() + 1);
    combined.push_str(username);
    combined.push(':');
    combined.push_str(password);

    let mut utf16le = Vec::with_capacity(combined.len() * 2);
    for unit in combined.encode_utf16() {
        utf16le.extend_from_slice(&unit.to_le_bytes());
    }

    let digest = sha3_256(&utf16le);
    utf16le.zeroize();
    digest
}

/// `x = SHA3-256(be_bytes(salt) || identity_hash)`, interpreted as a big-endian
/// unsigned integer. This resolves the reference's flagged ambiguity (SHA1 vs SHA3,
/// forward vs reversed hex) in favor of using SHA3-256 throughout and standard
/// big-endian byte order, documented as a deliberate choice rather than left open.
fn h_srp(salt: &Bigint, identity_hash: &[u8; 32]) -> Bigint {
    let mut buf = salt.to_be_bytes();
    buf.extend_from_slice(identity_hash);
    let digest = sha3_256(&buf);
    Bigint::from_be_bytes(&digest)
}

/// Draws a uniform value in `[0, 2^bits)` from `rng`, resampling on an all-zero draw so
/// that the result is strictly positive (spec §8, "Rejection of zero salt").
fn draw_positive<R: RngCore + CryptoRng>(bits: u32, rng: &mut R) -> Result<Bigint, SrpError> {
    let byte_len = bits.div_ceil(8) as usize;
    let extra_bits = byte_len * 8 - bits as usize;
    let mask = 0xffu8 >> extra_bits;

    loop {
        let mut bytes = vec![0u8; byte_len];
        rng.try_fill_bytes(&mut bytes)?;
        if byte_len > 0 {
            bytes[0] &= mask;
        }
        let value = Bigint::from_be_bytes(&bytes);
        if value.is_positive() {
            return Ok(value);
        }
    }
}

fn check_positive(value: &Bigint, name: &'static str) -> Result<(), SrpError> {
    if value.is_positive() {
        Ok(())
    } else {
        Err(SrpError::InvalidConfiguration(match name {
            "N" => "N must be positive",
            "g" => "g must be positive",
            "salt" => "salt must be positive",
            "scrambler" => "scrambler must be positive",
            _ => "value must be positive",
        }))
    }
}
