use rand::{seq::SliceRandom, Rng};

/// Browser identities presented in the `User-Agent` header.
pub const USER_AGENTS: [&str; 3] = [
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Ubuntu Chromium/71.0.3578.98 Chrome/74.0.3729.131 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.131 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/74.0.3729.131 Safari/537.36",
];

/// Picks a browser identity uniformly at random from [`USER_AGENTS`].
///
/// Called once per built request, never cached.
pub fn pick_identity() -> &'static str {
    pick_identity_with(&mut rand::thread_rng())
}

/// Same as [`pick_identity`] with an explicit randomness source.
pub fn pick_identity_with<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{rngs::StdRng, SeedableRng};

    use super::{pick_identity, pick_identity_with, USER_AGENTS};

    #[test]
    fn identity_comes_from_pool() {
        for _ in 0..50 {
            let identity = pick_identity();
            assert!(!identity.is_empty());
            assert!(USER_AGENTS.contains(&identity));
        }
    }

    #[test]
    fn every_identity_is_eventually_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..1_000).map(|_| pick_identity_with(&mut rng)).collect();
        assert_eq!(seen.len(), USER_AGENTS.len());
    }
}
