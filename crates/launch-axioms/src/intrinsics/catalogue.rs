//! Static table of the external math intrinsics a kernel may call.
//!
//! Helpers with a `__bugle_` prefix stand for the pointer-returning
//! functions (`frexpf`, `remquof`, `modff`, ...), which kernels see
//! split into one pure function per result.

use super::{Family, Intrinsic, ScalarType};

macro_rules! sig {
    ($family:ident, $ret:ident $name:literal ($($param:ident),*)) => {
        Intrinsic {
            name: $name,
            params: &[$(ScalarType::$param),*],
            ret: ScalarType::$ret,
            family: Family::$family,
        }
    };
}

pub(super) static CATALOGUE: &[Intrinsic] = &[
    sig!(Integer, UInt "__brev"(UInt)),
    sig!(Integer, ULongLong "__brevll"(ULongLong)),
    sig!(Integer, UInt "__byte_perm"(UInt, UInt, UInt)),
    sig!(Integer, Int "__clz"(Int)),
    sig!(Integer, Int "__clzll"(LongLong)),
    sig!(Integer, Int "__ffs"(Int)),
    sig!(Integer, Int "__ffsll"(LongLong)),
    sig!(Integer, LongLong "__mul64hi"(LongLong, LongLong)),
    sig!(Integer, Int "__mulhi"(Int, Int)),
    sig!(Integer, Int "__mul24"(Int, Int)),
    sig!(Integer, Int "__popc"(UInt)),
    sig!(Integer, Int "__popcll"(ULongLong)),
    sig!(Integer, UInt "__sad"(Int, Int, UInt)),
    sig!(Integer, ULongLong "__umul64hi"(ULongLong, ULongLong)),
    sig!(Integer, UInt "__umulhi"(UInt, UInt)),
    sig!(Integer, UInt "__umul24"(UInt, UInt)),
    sig!(Integer, UInt "__usad"(UInt, UInt, UInt)),
    sig!(SinglePrecision, Float "rsqrtf"(Float)),
    sig!(SinglePrecision, Float "sqrtf"(Float)),
    sig!(SinglePrecision, Float "cbrtf"(Float)),
    sig!(SinglePrecision, Float "rcbrtf"(Float)),
    sig!(SinglePrecision, Float "hypotf"(Float, Float)),
    sig!(SinglePrecision, Float "expf"(Float)),
    sig!(SinglePrecision, Float "exp2f"(Float)),
    sig!(SinglePrecision, Float "exp10f"(Float)),
    sig!(SinglePrecision, Float "expm1f"(Float)),
    sig!(SinglePrecision, Float "logf"(Float)),
    sig!(SinglePrecision, Float "log2f"(Float)),
    sig!(SinglePrecision, Float "log10f"(Float)),
    sig!(SinglePrecision, Float "log1pf"(Float)),
    sig!(SinglePrecision, Float "sinf"(Float)),
    sig!(SinglePrecision, Float "cosf"(Float)),
    sig!(SinglePrecision, Float "tanf"(Float)),
    sig!(SinglePrecision, Float "sinpif"(Float)),
    sig!(SinglePrecision, Float "cospif"(Float)),
    sig!(SinglePrecision, Float "asinf"(Float)),
    sig!(SinglePrecision, Float "acosf"(Float)),
    sig!(SinglePrecision, Float "atanf"(Float)),
    sig!(SinglePrecision, Float "atan2f"(Float, Float)),
    sig!(SinglePrecision, Float "sinhf"(Float)),
    sig!(SinglePrecision, Float "coshf"(Float)),
    sig!(SinglePrecision, Float "tanhf"(Float)),
    sig!(SinglePrecision, Float "asinhf"(Float)),
    sig!(SinglePrecision, Float "acoshf"(Float)),
    sig!(SinglePrecision, Float "atanhf"(Float)),
    sig!(SinglePrecision, Float "powf"(Float, Float)),
    sig!(SinglePrecision, Float "erff"(Float)),
    sig!(SinglePrecision, Float "erfcf"(Float)),
    sig!(SinglePrecision, Float "erfinvf"(Float)),
    sig!(SinglePrecision, Float "erfcinvf"(Float)),
    sig!(SinglePrecision, Float "erfcxf"(Float)),
    sig!(SinglePrecision, Float "lgammaf"(Float)),
    sig!(SinglePrecision, Float "tgammaf"(Float)),
    sig!(SinglePrecision, Float "fmaf"(Float, Float, Float)),
    sig!(SinglePrecision, Int "__bugle_frexpf_exp"(Float)),
    sig!(SinglePrecision, Float "__bugle_frexpf_frac"(Float)),
    sig!(SinglePrecision, Float "ldexpf"(Float, Int)),
    sig!(SinglePrecision, Float "scalbnf"(Float, Int)),
    sig!(SinglePrecision, Float "scalblnf"(Float, Long)),
    sig!(SinglePrecision, Float "logbf"(Float)),
    sig!(SinglePrecision, Int "ilogbf"(Float)),
    sig!(SinglePrecision, Float "j0f"(Float)),
    sig!(SinglePrecision, Float "j1f"(Float)),
    sig!(SinglePrecision, Float "jnf"(Float)),
    sig!(SinglePrecision, Float "y0f"(Float)),
    sig!(SinglePrecision, Float "y1f"(Float)),
    sig!(SinglePrecision, Float "ynf"(Int, Float)),
    sig!(SinglePrecision, Float "fmodf"(Float, Float)),
    sig!(SinglePrecision, Float "remainderf"(Float, Float)),
    sig!(SinglePrecision, Int "__bugle_remquof_quo"(Float, Float)),
    sig!(SinglePrecision, Float "__bugle_modff_ipart"(Float)),
    sig!(SinglePrecision, Float "__bugle_modff_frac"(Float)),
    sig!(SinglePrecision, Float "fdimf"(Float, Float)),
    sig!(SinglePrecision, Float "truncf"(Float)),
    sig!(SinglePrecision, Float "roundf"(Float)),
    sig!(SinglePrecision, Float "rintf"(Float)),
    sig!(SinglePrecision, Float "nearbyintf"(Float)),
    sig!(SinglePrecision, Float "ceilf"(Float)),
    sig!(SinglePrecision, Float "floorf"(Float)),
    sig!(SinglePrecision, Long "lrintf"(Float)),
    sig!(SinglePrecision, Long "lroundf"(Float)),
    sig!(SinglePrecision, LongLong "llrintf"(Float)),
    sig!(SinglePrecision, LongLong "llroundf"(Float)),
    sig!(SinglePrecision, Float "fabsf"(Float)),
    sig!(SinglePrecision, Float "fmaxf"(Float, Float)),
    sig!(SinglePrecision, Float "fminf"(Float, Float)),
    sig!(SinglePrecision, Int "isnan"(Float)),
    sig!(DoublePrecision, Double "rsqrt"(Double)),
    sig!(DoublePrecision, Double "sqrt"(Double)),
    sig!(DoublePrecision, Double "cbrt"(Double)),
    sig!(DoublePrecision, Double "rcbrt"(Double)),
    sig!(DoublePrecision, Double "hypot"(Double, Double)),
    sig!(DoublePrecision, Double "exp"(Double)),
    sig!(DoublePrecision, Double "exp2"(Double)),
    sig!(DoublePrecision, Double "exp10"(Double)),
    sig!(DoublePrecision, Double "expm1"(Double)),
    sig!(DoublePrecision, Double "log"(Double)),
    sig!(DoublePrecision, Double "log2"(Double)),
    sig!(DoublePrecision, Double "log10"(Double)),
    sig!(DoublePrecision, Double "log1p"(Double)),
    sig!(DoublePrecision, Double "sin"(Double)),
    sig!(DoublePrecision, Double "cos"(Double)),
    sig!(DoublePrecision, Double "tan"(Double)),
    sig!(DoublePrecision, Double "sinpi"(Double)),
    sig!(DoublePrecision, Double "cospi"(Double)),
    sig!(DoublePrecision, Double "asin"(Double)),
    sig!(DoublePrecision, Double "acos"(Double)),
    sig!(DoublePrecision, Double "atan"(Double)),
    sig!(DoublePrecision, Double "atan2"(Double, Double)),
    sig!(DoublePrecision, Double "sinh"(Double)),
    sig!(DoublePrecision, Double "cosh"(Double)),
    sig!(DoublePrecision, Double "tanh"(Double)),
    sig!(DoublePrecision, Double "asinh"(Double)),
    sig!(DoublePrecision, Double "acosh"(Double)),
    sig!(DoublePrecision, Double "atanh"(Double)),
    sig!(DoublePrecision, Double "pow"(Double, Double)),
    sig!(DoublePrecision, Double "erf"(Double)),
    sig!(DoublePrecision, Double "erfc"(Double)),
    sig!(DoublePrecision, Double "erfinv"(Double)),
    sig!(DoublePrecision, Double "erfcinv"(Double)),
    sig!(DoublePrecision, Double "erfcx"(Double)),
    sig!(DoublePrecision, Double "lgamma"(Double)),
    sig!(DoublePrecision, Double "tgamma"(Double)),
    sig!(DoublePrecision, Double "fma"(Double, Double, Double)),
    sig!(DoublePrecision, Int "__bugle_frexp_exp"(Double)),
    sig!(DoublePrecision, Double "__bugle_frexp_frac"(Double)),
    sig!(DoublePrecision, Double "ldexp"(Double, Int)),
    sig!(DoublePrecision, Double "scalbn"(Double, Int)),
    sig!(DoublePrecision, Double "scalbln"(Double, Long)),
    sig!(DoublePrecision, Double "logb"(Double)),
    sig!(DoublePrecision, Int "ilogb"(Double)),
    sig!(DoublePrecision, Double "j0"(Double)),
    sig!(DoublePrecision, Double "j1"(Double)),
    sig!(DoublePrecision, Double "jn"(Int, Double)),
    sig!(DoublePrecision, Double "y0"(Double)),
    sig!(DoublePrecision, Double "y1"(Double)),
    sig!(DoublePrecision, Double "yn"(Int, Double)),
    sig!(DoublePrecision, Double "fmod"(Double, Double)),
    sig!(DoublePrecision, Double "remainder"(Double, Double)),
    sig!(DoublePrecision, Int "__bugle_remquo_quo"(Double, Double)),
    sig!(DoublePrecision, Double "__bugle_modf_ipart"(Double)),
    sig!(DoublePrecision, Double "__bugle_modf_frac"(Double)),
    sig!(DoublePrecision, Double "fdim"(Double, Double)),
    sig!(DoublePrecision, Double "trunc"(Double)),
    sig!(DoublePrecision, Double "round"(Double)),
    sig!(DoublePrecision, Double "rint"(Double)),
    sig!(DoublePrecision, Double "nearbyint"(Double)),
    sig!(DoublePrecision, Double "ceil"(Double)),
    sig!(DoublePrecision, Double "floor"(Double)),
    sig!(DoublePrecision, Long "lrint"(Double)),
    sig!(DoublePrecision, Long "lround"(Double)),
    sig!(DoublePrecision, LongLong "llrint"(Double)),
    sig!(DoublePrecision, LongLong "llround"(Double)),
    sig!(DoublePrecision, Double "fabs"(Double)),
    sig!(DoublePrecision, Double "fmax"(Double, Double)),
    sig!(DoublePrecision, Double "fmin"(Double, Double)),
    sig!(FastMath, Float "__fdividef"(Float, Float)),
    sig!(FastMath, Float "__sinf"(Float)),
    sig!(FastMath, Float "__cosf"(Float)),
    sig!(FastMath, Float "__tanf"(Float)),
    sig!(FastMath, Float "__logf"(Float)),
    sig!(FastMath, Float "__log2f"(Float)),
    sig!(FastMath, Float "__log10f"(Float)),
    sig!(FastMath, Float "__expf"(Float)),
    sig!(FastMath, Float "__exp10f"(Float)),
    sig!(FastMath, Float "__powf"(Float, Float)),
    sig!(FastMath, Float "__saturatef"(Float)),
    sig!(RoundingMode, Float "__fadd_rn"(Float, Float)),
    sig!(RoundingMode, Float "__fadd_rz"(Float, Float)),
    sig!(RoundingMode, Float "__fadd_ru"(Float, Float)),
    sig!(RoundingMode, Float "__fadd_rd"(Float, Float)),
    sig!(RoundingMode, Float "__fmul_rn"(Float, Float)),
    sig!(RoundingMode, Float "__fmul_rz"(Float, Float)),
    sig!(RoundingMode, Float "__fmul_ru"(Float, Float)),
    sig!(RoundingMode, Float "__fmul_rd"(Float, Float)),
    sig!(RoundingMode, Float "__fmaf_rn"(Float, Float, Float)),
    sig!(RoundingMode, Float "__fmaf_rz"(Float, Float, Float)),
    sig!(RoundingMode, Float "__fmaf_ru"(Float, Float, Float)),
    sig!(RoundingMode, Float "__fmaf_rd"(Float, Float, Float)),
    sig!(RoundingMode, Float "__frcp_rn"(Float)),
    sig!(RoundingMode, Float "__frcp_rz"(Float)),
    sig!(RoundingMode, Float "__frcp_ru"(Float)),
    sig!(RoundingMode, Float "__frcp_rd"(Float)),
    sig!(RoundingMode, Float "__fsqrt_rn"(Float)),
    sig!(RoundingMode, Float "__fsqrt_rz"(Float)),
    sig!(RoundingMode, Float "__fsqrt_ru"(Float)),
    sig!(RoundingMode, Float "__fsqrt_rd"(Float)),
    sig!(RoundingMode, Float "__fdiv_rn"(Float, Float)),
    sig!(RoundingMode, Float "__fdiv_rz"(Float, Float)),
    sig!(RoundingMode, Float "__fdiv_ru"(Float, Float)),
    sig!(RoundingMode, Float "__fdiv_rd"(Float, Float)),
    sig!(RoundingMode, Double "__dadd_rn"(Double, Double)),
    sig!(RoundingMode, Double "__dadd_rz"(Double, Double)),
    sig!(RoundingMode, Double "__dadd_ru"(Double, Double)),
    sig!(RoundingMode, Double "__dadd_rd"(Double, Double)),
    sig!(RoundingMode, Double "__dmul_rn"(Double, Double)),
    sig!(RoundingMode, Double "__dmul_rz"(Double, Double)),
    sig!(RoundingMode, Double "__dmul_ru"(Double, Double)),
    sig!(RoundingMode, Double "__dmul_rd"(Double, Double)),
    sig!(RoundingMode, Double "__fma_rn"(Double, Double, Double)),
    sig!(RoundingMode, Double "__fma_rz"(Double, Double, Double)),
    sig!(RoundingMode, Double "__fma_ru"(Double, Double, Double)),
    sig!(RoundingMode, Double "__fma_rd"(Double, Double, Double)),
    sig!(RoundingMode, Double "__ddiv_rn"(Double, Double)),
    sig!(RoundingMode, Double "__ddiv_rz"(Double, Double)),
    sig!(RoundingMode, Double "__ddiv_ru"(Double, Double)),
    sig!(RoundingMode, Double "__ddiv_rd"(Double, Double)),
    sig!(RoundingMode, Double "__drcp_rn"(Double)),
    sig!(RoundingMode, Double "__drcp_rz"(Double)),
    sig!(RoundingMode, Double "__drcp_ru"(Double)),
    sig!(RoundingMode, Double "__drcp_rd"(Double)),
    sig!(RoundingMode, Double "__dsqrt_rn"(Double)),
    sig!(RoundingMode, Double "__dsqrt_rz"(Double)),
    sig!(RoundingMode, Double "__dsqrt_ru"(Double)),
    sig!(RoundingMode, Double "__dsqrt_rd"(Double)),
    sig!(Overloaded, Float "abs"(Float)),
    sig!(Overloaded, Int "abs"(Int)),
    sig!(Overloaded, Float "saturate"(Float)),
    sig!(Overloaded, Int "max"(Int, Int)),
    sig!(Overloaded, Int "min"(Int, Int)),
    sig!(Overloaded, UInt "min"(UInt, UInt)),
    sig!(Overloaded, UInt "min"(Int, UInt)),
    sig!(Overloaded, UInt "min"(UInt, Int)),
    sig!(Overloaded, LongLong "min"(LongLong, LongLong)),
    sig!(Overloaded, ULongLong "min"(ULongLong, ULongLong)),
    sig!(Overloaded, ULongLong "min"(LongLong, ULongLong)),
    sig!(Overloaded, ULongLong "min"(ULongLong, LongLong)),
    sig!(Overloaded, Float "min"(Float, Float)),
    sig!(Overloaded, Double "min"(Double, Double)),
    sig!(Overloaded, Double "min"(Float, Double)),
    sig!(Overloaded, Double "min"(Double, Float)),
    sig!(Overloaded, UInt "umin"(UInt, UInt)),
    sig!(Overloaded, LongLong "llmin"(LongLong, LongLong)),
    sig!(Overloaded, ULongLong "ullmin"(ULongLong, ULongLong)),
    sig!(Cast, Int "__float2int_rn"(Float)),
    sig!(Cast, Float "__int_as_float"(Int)),
];
