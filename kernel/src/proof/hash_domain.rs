//! Typed domain separators for canonical hashing.
//!
//! Every production hash computation selects a domain via [`HashDomain`].
//! Adding a new domain is a single change here: the enum, `as_bytes()`,
//! `ALL`, and `Display` are all generated from the same macro invocation.

/// Declares `HashDomain` enum, `as_bytes()`, `ALL`, and `Display` from one list.
macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Every variant maps to a unique, null-terminated byte string used as
        /// a SHA-256 prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    // -----------------------------------------------------------------------
    // Kernel (planning model)
    // -----------------------------------------------------------------------

    /// `StateV1` identity hashing.
    StateIdentity => b"MRW::STATE_IDENTITY::V1\0",

    /// Canonical problem payload hashing.
    ProblemPayload => b"MRW::PROBLEM_PAYLOAD::V1\0",

    /// Action registry hashing.
    ActionRegistry => b"MRW::ACTION_REGISTRY::V1\0",

    /// Plan digest: initial step commitment.
    PlanStep => b"MRW::PLAN_STEP::V1\0",

    /// Plan digest: chained step commitment.
    PlanStepChain => b"MRW::PLAN_STEP_CHAIN::V1\0",

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Search report hashing.
    SearchReport => b"MRW::SEARCH_REPORT::V1\0",

    // -----------------------------------------------------------------------
    // Harness
    // -----------------------------------------------------------------------

    /// Run report hashing.
    RunReport => b"MRW::RUN_REPORT::V1\0",

    // -----------------------------------------------------------------------
    // Benchmarks
    // -----------------------------------------------------------------------

    /// Benchmark determinism guard.
    BenchGuard => b"MRW::BENCH_GUARD::V1\0",
}
