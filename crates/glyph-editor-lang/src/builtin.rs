//! Built-in HLSL and GLSL definitions.

use crate::definition::LanguageDefinition;
use crate::syntax::SyntaxClass;
use crate::tokenizer::TokenRule;

/// Token rules shared by the C-family shading languages, highest priority first.
const C_FAMILY_RULES: &[(&str, SyntaxClass)] = &[
    (r"[ \t]*#[ \t]*[a-zA-Z_]+", SyntaxClass::Preprocessor),
    (r#"L?"(\\.|[^"])*""#, SyntaxClass::String),
    (r"'\\?[^']'", SyntaxClass::CharLiteral),
    (
        r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)([eE][+-]?[0-9]+)?[fF]?",
        SyntaxClass::Number,
    ),
    (r"[+-]?[0-9]+[Uu]?[lL]?[lL]?", SyntaxClass::Number),
    (r"0[0-7]+[Uu]?[lL]?[lL]?", SyntaxClass::Number),
    (r"0[xX][0-9a-fA-F]+[uU]?[lL]?[lL]?", SyntaxClass::Number),
    (r"[a-zA-Z_][a-zA-Z0-9_]*", SyntaxClass::Identifier),
    (r"[\[\]{}!%^&*()+=~|<>?/;,.\-]", SyntaxClass::Punctuation),
];

fn c_family_rules() -> Vec<TokenRule> {
    C_FAMILY_RULES
        .iter()
        .filter_map(|(pattern, class)| match TokenRule::new(pattern, *class) {
            Ok(rule) => Some(rule),
            Err(err) => {
                tracing::error!("built-in token rule failed to compile: {err}");
                None
            }
        })
        .collect()
}

impl LanguageDefinition {
    /// HLSL: keywords, intrinsic functions with descriptions, C-style comments and literals.
    pub fn hlsl() -> Self {
        Self::new("HLSL")
            .with_keywords(HLSL_KEYWORDS.iter().copied())
            .with_identifiers(HLSL_IDENTIFIERS.iter().copied())
            .with_compiled_rules(c_family_rules())
    }

    /// GLSL: keywords, C-style comments and literals.
    pub fn glsl() -> Self {
        Self::new("GLSL")
            .with_keywords(GLSL_KEYWORDS.iter().copied())
            .with_compiled_rules(c_family_rules())
    }
}

const HLSL_KEYWORDS: &[&str] = &[
    "AppendStructuredBuffer", "asm", "asm_fragment", "BlendState", "bool", "break", "Buffer",
    "ByteAddressBuffer", "case", "cbuffer", "centroid", "class", "column_major", "compile",
    "compile_fragment", "CompileShader", "const", "continue", "ComputeShader",
    "ConsumeStructuredBuffer", "default", "DepthStencilState", "DepthStencilView", "discard", "do",
    "double", "DomainShader", "dword", "else", "export", "extern", "false", "float", "for",
    "fxgroup", "GeometryShader", "groupshared", "half", "Hullshader", "if", "in", "inline", "inout",
    "InputPatch", "int", "interface", "line", "lineadj", "linear", "LineStream", "matrix",
    "min16float", "min10float", "min16int", "min12int", "min16uint", "namespace", "nointerpolation",
    "noperspective", "NULL", "out", "OutputPatch", "packoffset", "pass", "pixelfragment",
    "PixelShader", "point", "PointStream", "precise", "RasterizerState", "RenderTargetView",
    "return", "register", "row_major", "RWBuffer", "RWByteAddressBuffer", "RWStructuredBuffer",
    "RWTexture1D", "RWTexture1DArray", "RWTexture2D", "RWTexture2DArray", "RWTexture3D", "sample",
    "sampler", "SamplerState", "SamplerComparisonState", "shared", "snorm", "stateblock",
    "stateblock_state", "static", "string", "struct", "switch", "StructuredBuffer", "tbuffer",
    "technique", "technique10", "technique11", "texture", "Texture1D", "Texture1DArray",
    "Texture2D", "Texture2DArray", "Texture2DMS", "Texture2DMSArray", "Texture3D", "TextureCube",
    "TextureCubeArray", "true", "typedef", "triangle", "triangleadj", "TriangleStream", "uint",
    "uniform", "unorm", "unsigned", "vector", "vertexfragment", "VertexShader", "void", "volatile",
    "while", "bool1", "bool2", "bool3", "bool4", "double1", "double2", "double3", "double4",
    "float1", "float2", "float3", "float4", "int1", "int2", "int3", "int4", "uint1", "uint2",
    "uint3", "uint4", "dword1", "dword2", "dword3", "dword4", "half1", "half2", "half3", "half4",
    "float1x1", "float2x1", "float3x1", "float4x1", "float1x2", "float2x2", "float3x2", "float4x2",
    "float1x3", "float2x3", "float3x3", "float4x3", "float1x4", "float2x4", "float3x4", "float4x4",
    "half1x1", "half2x1", "half3x1", "half4x1", "half1x2", "half2x2", "half3x2", "half4x2",
    "half1x3", "half2x3", "half3x3", "half4x3", "half1x4", "half2x4", "half3x4", "half4x4",
];

const GLSL_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum",
    "extern", "float", "for", "goto", "if", "inline", "int", "long", "register", "restrict",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool", "_Complex",
    "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local", "attribute",
    "uniform", "varying", "layout", "centroid", "flat", "smooth", "noperspective", "patch",
    "sample", "subroutine", "in", "out", "inout", "bool", "true", "false", "invariant", "mat2",
    "mat3", "mat4", "dmat2", "dmat3", "dmat4", "mat2x2", "mat2x3", "mat2x4", "dmat2x2", "dmat2x3",
    "dmat2x4", "mat3x2", "mat3x3", "mat3x4", "dmat3x2", "dmat3x3", "dmat3x4", "mat4x2", "mat4x3",
    "mat4x4", "dmat4x2", "dmat4x3", "dmat4x4", "vec2", "vec3", "vec4", "ivec2", "ivec3", "ivec4",
    "bvec2", "bvec3", "bvec4", "dvec2", "dvec3", "dvec4", "uint", "uvec2", "uvec3", "uvec4", "lowp",
    "mediump", "highp", "precision", "sampler1D", "sampler2D", "sampler3D", "samplerCube",
    "sampler1DShadow", "sampler2DShadow", "samplerCubeShadow", "sampler1DArray", "sampler2DArray",
    "sampler1DArrayShadow", "sampler2DArrayShadow", "isampler1D", "isampler2D", "isampler3D",
    "isamplerCube", "isampler1DArray", "isampler2DArray", "usampler1D", "usampler2D", "usampler3D",
    "usamplerCube", "usampler1DArray", "usampler2DArray", "sampler2DRect", "sampler2DRectShadow",
    "isampler2DRect", "usampler2DRect", "samplerBuffer", "isamplerBuffer", "usamplerBuffer",
    "sampler2DMS", "isampler2DMS", "usampler2DMS", "sampler2DMSArray", "isampler2DMSArray",
    "usampler2DMSArray", "samplerCubeArray", "samplerCubeArrayShadow", "isamplerCubeArray",
    "usamplerCubeArray", "shared", "writeonly", "readonly", "image2D", "image1D", "image3D",
];

const HLSL_IDENTIFIERS: &[(&str, &str)] = &[
    ("abort", "Terminates the current draw or dispatch call being executed."),
    ("abs", "Absolute value (per component)."),
    ("acos", "Returns the arccosine of each component of x."),
    ("all", "Test if all components of x are nonzero."),
    ("AllMemoryBarrier", "Blocks execution of all threads in a group until all memory accesses have been completed."),
    ("AllMemoryBarrierWithGroupSync", "Blocks execution of all threads in a group until all memory accesses have been completed and all threads in the group have reached this call."),
    ("any", "Test if any component of x is nonzero."),
    ("asdouble", "Reinterprets a cast value into a double."),
    ("asfloat", "Convert the input type to a float."),
    ("asin", "Returns the arcsine of each component of x."),
    ("asint", "Convert the input type to an integer."),
    ("asuint", "Convert the input type to an unsigned integer."),
    ("atan", "Returns the arctangent of x."),
    ("atan2", "Returns the arctangent of of two values (x,y)."),
    ("ceil", "Returns the smallest integer which is greater than or equal to x."),
    ("CheckAccessFullyMapped", "Determines whether all values from a Sample or Load operation accessed mapped tiles in a tiled resource."),
    ("clamp", "Clamps x to the range [min, max]."),
    ("clip", "Discards the current pixel, if any component of x is less than zero."),
    ("cos", "Returns the cosine of x."),
    ("cosh", "Returns the hyperbolic cosine of x."),
    ("countbits", "Counts the number of bits (per component) in the input integer."),
    ("cross", "Returns the cross product of two 3D vectors."),
    ("D3DCOLORtoUBYTE4", "Swizzles and scales components of the 4D vector x to compensate for the lack of UBYTE4 support in some hardware."),
    ("ddx", "Returns the partial derivative of x with respect to the screen-space x-coordinate."),
    ("ddx_coarse", "Computes a low precision partial derivative with respect to the screen-space x-coordinate."),
    ("ddx_fine", "Computes a high precision partial derivative with respect to the screen-space x-coordinate."),
    ("ddy", "Returns the partial derivative of x with respect to the screen-space y-coordinate."),
    ("ddy_coarse", "Returns the partial derivative of x with respect to the screen-space y-coordinate."),
    ("ddy_fine", "Computes a high precision partial derivative with respect to the screen-space y-coordinate."),
    ("degrees", "Converts x from radians to degrees."),
    ("determinant", "Returns the determinant of the square matrix m."),
    ("DeviceMemoryBarrier", "Blocks execution of all threads in a group until all device memory accesses have been completed."),
    ("DeviceMemoryBarrierWithGroupSync", "Blocks execution of all threads in a group until all device memory accesses have been completed and all threads in the group have reached this call."),
    ("distance", "Returns the distance between two points."),
    ("dot", "Returns the dot product of two vectors."),
    ("dst", "Calculates a distance vector."),
    ("errorf", "Submits an error message to the information queue."),
    ("EvaluateAttributeAtCentroid", "Evaluates at the pixel centroid."),
    ("EvaluateAttributeAtSample", "Evaluates at the indexed sample location."),
    ("EvaluateAttributeSnapped", "Evaluates at the pixel centroid with an offset."),
    ("exp", "Returns the base-e exponent."),
    ("exp2", "Base 2 exponent(per component)."),
    ("f16tof32", "Converts the float16 stored in the low-half of the uint to a float."),
    ("f32tof16", "Converts an input into a float16 type."),
    ("faceforward", "Returns -n * sign(dot(i, ng))."),
    ("firstbithigh", "Gets the location of the first set bit starting from the highest order bit and working downward, per component."),
    ("firstbitlow", "Returns the location of the first set bit starting from the lowest order bit and working upward, per component."),
    ("floor", "Returns the greatest integer which is less than or equal to x."),
    ("fma", "Returns the double-precision fused multiply-addition of a * b + c."),
    ("fmod", "Returns the floating point remainder of x/y."),
    ("frac", "Returns the fractional part of x."),
    ("frexp", "Returns the mantissa and exponent of x."),
    ("fwidth", "Returns abs(ddx(x)) + abs(ddy(x))"),
    ("GetRenderTargetSampleCount", "Returns the number of render-target samples."),
    ("GetRenderTargetSamplePosition", "Returns a sample position (x,y) for a given sample index."),
    ("GroupMemoryBarrier", "Blocks execution of all threads in a group until all group shared accesses have been completed."),
    ("GroupMemoryBarrierWithGroupSync", "Blocks execution of all threads in a group until all group shared accesses have been completed and all threads in the group have reached this call."),
    ("InterlockedAdd", "Performs a guaranteed atomic add of value to the dest resource variable."),
    ("InterlockedAnd", "Performs a guaranteed atomic and."),
    ("InterlockedCompareExchange", "Atomically compares the input to the comparison value and exchanges the result."),
    ("InterlockedCompareStore", "Atomically compares the input to the comparison value."),
    ("InterlockedExchange", "Assigns value to dest and returns the original value."),
    ("InterlockedMax", "Performs a guaranteed atomic max."),
    ("InterlockedMin", "Performs a guaranteed atomic min."),
    ("InterlockedOr", "Performs a guaranteed atomic or."),
    ("InterlockedXor", "Performs a guaranteed atomic xor."),
    ("isfinite", "Returns true if x is finite, false otherwise."),
    ("isinf", "Returns true if x is +INF or -INF, false otherwise."),
    ("isnan", "Returns true if x is NAN or QNAN, false otherwise."),
    ("ldexp", "Returns x * 2exp"),
    ("length", "Returns the length of the vector v."),
    ("lerp", "Returns x + s(y - x)."),
    ("lit", "Returns a lighting vector (ambient, diffuse, specular, 1)"),
    ("log", "Returns the base-e logarithm of x."),
    ("log10", "Returns the base-10 logarithm of x."),
    ("log2", "Returns the base - 2 logarithm of x."),
    ("mad", "Performs an arithmetic multiply/add operation on three values."),
    ("max", "Selects the greater of x and y."),
    ("min", "Selects the lesser of x and y."),
    ("modf", "Splits the value x into fractional and integer parts."),
    ("msad4", "Compares a 4-byte reference value and an 8-byte source value and accumulates a vector of 4 sums."),
    ("mul", "Performs matrix multiplication using x and y."),
    ("noise", "Generates a random value using the Perlin-noise algorithm."),
    ("normalize", "Returns a normalized vector."),
    ("pow", "Returns x^n."),
    ("printf", "Submits a custom shader message to the information queue."),
    ("Process2DQuadTessFactorsAvg", "Generates the corrected tessellation factors for a quad patch."),
    ("Process2DQuadTessFactorsMax", "Generates the corrected tessellation factors for a quad patch."),
    ("Process2DQuadTessFactorsMin", "Generates the corrected tessellation factors for a quad patch."),
    ("ProcessIsolineTessFactors", "Generates the rounded tessellation factors for an isoline."),
    ("ProcessQuadTessFactorsAvg", "Generates the corrected tessellation factors for a quad patch."),
    ("ProcessQuadTessFactorsMax", "Generates the corrected tessellation factors for a quad patch."),
    ("ProcessQuadTessFactorsMin", "Generates the corrected tessellation factors for a quad patch."),
    ("ProcessTriTessFactorsAvg", "Generates the corrected tessellation factors for a tri patch."),
    ("ProcessTriTessFactorsMax", "Generates the corrected tessellation factors for a tri patch."),
    ("ProcessTriTessFactorsMin", "Generates the corrected tessellation factors for a tri patch."),
    ("radians", "Converts x from degrees to radians."),
    ("rcp", "Calculates a fast, approximate, per-component reciprocal."),
    ("reflect", "Returns a reflection vector."),
    ("refract", "Returns the refraction vector."),
    ("reversebits", "Reverses the order of the bits, per component."),
    ("round", "Rounds x to the nearest integer"),
    ("rsqrt", "Returns 1 / sqrt(x)"),
    ("saturate", "Clamps x to the range [0, 1]"),
    ("sign", "Computes the sign of x."),
    ("sin", "Returns the sine of x"),
    ("sincos", "Returns the sineand cosine of x."),
    ("sinh", "Returns the hyperbolic sine of x"),
    ("smoothstep", "Returns a smooth Hermite interpolation between 0 and 1."),
    ("sqrt", "Square root (per component)"),
    ("step", "Returns (x >= a) ? 1 : 0"),
    ("tan", "Returns the tangent of x"),
    ("tanh", "Returns the hyperbolic tangent of x"),
    ("tex1D", "1D texture lookup."),
    ("tex1Dbias", "1D texture lookup with bias."),
    ("tex1Dgrad", "1D texture lookup with a gradient."),
    ("tex1Dlod", "1D texture lookup with LOD."),
    ("tex1Dproj", "1D texture lookup with projective divide."),
    ("tex2D", "2D texture lookup."),
    ("tex2Dbias", "2D texture lookup with bias."),
    ("tex2Dgrad", "2D texture lookup with a gradient."),
    ("tex2Dlod", "2D texture lookup with LOD."),
    ("tex2Dproj", "2D texture lookup with projective divide."),
    ("tex3D", "3D texture lookup."),
    ("tex3Dbias", "3D texture lookup with bias."),
    ("tex3Dgrad", "3D texture lookup with a gradient."),
    ("tex3Dlod", "3D texture lookup with LOD."),
    ("tex3Dproj", "3D texture lookup with projective divide."),
    ("texCUBE", "Cube texture lookup."),
    ("texCUBEbias", "Cube texture lookup with bias."),
    ("texCUBEgrad", "Cube texture lookup with a gradient."),
    ("texCUBElod", "Cube texture lookup with LOD."),
    ("texCUBEproj", "Cube texture lookup with projective divide."),
    ("transpose", "Returns the transpose of the matrix m."),
    ("trunc", "Truncates floating-point value(s) to integer value(s)"),
    ("asinh", "genType asinh(genType x)\nReturns the arc hyperbolic sine of x"),
    ("acosh", "genType acosh(genType x)\nReturns the arc hyperbolic cosine of x."),
    ("atanh", "genType atanh(genType x)\nReturns the arc hyperbolic tangent of x"),
    ("inversesqrt", "genType inversesqrt(genType x)\ngenDType inversesqrt(genDType x)\nReturns rcp(sqrt(x))."),
    ("roundEven", "genType roundEven(genType x)\ngenDType roundEven(genDType x)\nReturns a value equal to the nearest integer to x. A fractional part of 0.5 will round toward the nearest even integer."),
    ("fract", "genType fract(genType x)\ngenDType fract(genDType x)\nReturns the fractional part of x."),
    ("mod", "genType mod(genType x, float y)\ngenType mod(genType x, genType y)\ngenDType mod(genDType x, double y)\ngenDType mod(genDType x, genDType y)\nModulus.Returns x – y * floor(x / y)."),
    ("mix", "genType mix(genType x, genType y, genType a)\ngenType mix(genType x, genType y, float a)\nReturns x*(1-a)+y*a."),
    ("floatBitsToInt", "genIType floatBitsToInt(genType x)\nReturns a signed or unsigned integer value representing the encoding of a floating-point value. The floatingpoint value's bit-level representation is preserved."),
    ("floatBitsToUint", "genUType floatBitsToUint(genType x)\nReturns a signed or unsigned integer value representing the encoding of a floating-point value. The floatingpoint value's bit-level representation is preserved."),
    ("intBitsToFloat", "genType intBitsToFloat(genIType x)\nReturns a floating-point value corresponding to a signed or unsigned integer encoding of a floating-point value."),
    ("uintBitsToFloat", "genType uintBitsToFloat(genUType x)\nReturns a floating-point value corresponding to a signed or unsigned integer encoding of a floating-point value."),
    ("packUnorm2x16", "uint packUnorm2x16(vec2 v)\nFirst, converts each component of the normalized floating - point value v into 8 or 16bit integer values. Then, the results are packed into the returned 32bit unsigned integer."),
    ("packUnorm4x8", "uint packUnorm4x8(vec4 v)\nFirst, converts each component of the normalized floating - point value v into 8 or 16bit integer values. Then, the results are packed into the returned 32bit unsigned integer."),
    ("packSnorm4x8", "uint packUnorm4x8(vec4 v)\nFirst, converts each component of the normalized floating - point value v into 8 or 16bit integer values. Then, the results are packed into the returned 32bit unsigned integer."),
    ("unpackUnorm2x16", "vec2 unpackUnorm2x16(uint p)\nFirst, unpacks a single 32bit unsigned integer p into a pair of 16bit unsigned integers, four 8bit unsigned integers, or four 8bit signed integers.Then, each component is converted to a normalized floating point value to generate the returned two or four component vector."),
    ("unpackUnorm4x8", "vec4 unpackUnorm4x8(uint p)\nFirst, unpacks a single 32bit unsigned integer p into a pair of 16bit unsigned integers, four 8bit unsigned integers, or four 8bit signed integers.Then, each component is converted to a normalized floating point value to generate the returned two or four component vector."),
    ("unpackSnorm4x8", "vec4 unpackSnorm4x8(uint p)\nFirst, unpacks a single 32bit unsigned integer p into a pair of 16bit unsigned integers, four 8bit unsigned integers, or four 8bit signed integers.Then, each component is converted to a normalized floating point value to generate the returned two or four component vector."),
    ("packDouble2x32", "double packDouble2x32(uvec2 v)\nReturns a double-precision value obtained by packing the components of v into a 64-bit value."),
    ("unpackDouble2x32", "uvec2 unpackDouble2x32(double d)\nReturns a two-component unsigned integer vector representation of v."),
    ("matrixCompMult", "mat matrixCompMult(mat x, mat y)\nMultiply matrix x by matrix y component-wise."),
    ("outerProduct", "Linear algebraic matrix multiply c * r."),
    ("inverse", "mat inverse(mat m)\nReturns a matrix that is the inverse of m."),
    ("lessThan", "bvec lessThan(vec x, vec y)\nReturns the component-wise compare of x < y"),
    ("lessThanEqual", "bvec lessThanEqual(vec x, vec y)\nReturns the component-wise compare of x <= y"),
    ("greaterThan", "bvec greaterThan(vec x, vec y)\nReturns the component-wise compare of x > y"),
    ("greaterThanEqual", "bvec greaterThanEqual(vec x, vec y)\nReturns the component-wise compare of x >= y"),
    ("equal", "bvec equal(vec x, vec y)\nReturns the component-wise compare of x == y"),
    ("notEqual", "bvec notEqual(vec x, vec y)\nReturns the component-wise compare of x != y"),
    ("not", "bvec not(bvec x)\nReturns the component-wise logical complement of x."),
    ("uaddCarry", "genUType uaddCarry(genUType x, genUType y, out genUType carry)\nAdds 32bit unsigned integer x and y, returning the sum modulo 2^32."),
    ("usubBorrow", "genUType usubBorrow(genUType x, genUType y, out genUType borrow)\nSubtracts the 32bit unsigned integer y from x, returning the difference if non-negatice, or 2^32 plus the difference otherwise."),
    ("umulExtended", "void umulExtended(genUType x, genUType y, out genUType msb, out genUType lsb)\nMultiplies 32bit integers x and y, producing a 64bit result."),
    ("imulExtended", "void imulExtended(genIType x, genIType y, out genIType msb, out genIType lsb)\nMultiplies 32bit integers x and y, producing a 64bit result."),
    ("bitfieldExtract", "genIType bitfieldExtract(genIType value, int offset, int bits)\ngenUType bitfieldExtract(genUType value, int offset, int bits)\nExtracts bits [offset, offset + bits - 1] from value, returning them in the least significant bits of the result."),
    ("bitfieldInsert", "genIType bitfieldInsert(genIType base, genIType insert, int offset, int bits)\ngenUType bitfieldInsert(genUType base, genUType insert, int offset, int bits)\nReturns the insertion the bits leas-significant bits of insert into base"),
    ("bitfieldReverse", "genIType bitfieldReverse(genIType value)\ngenUType bitfieldReverse(genUType value)\nReturns the reversal of the bits of value."),
    ("bitCount", "genIType bitCount(genIType value)\ngenUType bitCount(genUType value)\nReturns the number of bits set to 1 in the binary representation of value."),
    ("findLSB", "genIType findLSB(genIType value)\ngenUType findLSB(genUType value)\nReturns the bit number of the least significant bit set to 1 in the binary representation of value."),
    ("findMSB", "genIType findMSB(genIType value)\ngenUType findMSB(genUType value)\nReturns the bit number of the most significant bit in the binary representation of value."),
    ("textureSize", "ivecX textureSize(gsamplerXD sampler, int lod)\nReturns the dimensions of level lod  (if present) for the texture bound to sample."),
    ("textureQueryLod", "vec2 textureQueryLod(gsamplerXD sampler, vecX P)\nReturns the mipmap array(s) that would be accessed in the x component of the return value."),
    ("texture", "gvec4 texture(gsamplerXD sampler, vecX P, [float bias])\nUse the texture coordinate P to do a texture lookup in the texture currently bound to sampler."),
    ("textureProj", "Do a texture lookup with projection."),
    ("textureLod", "gvec4 textureLod(gsamplerXD sampler, vecX P, float lod)\nDo a texture lookup as in texture but with explicit LOD."),
    ("textureOffset", "gvec4 textureOffset(gsamplerXD sampler, vecX P, ivecX offset, [float bias])\nDo a texture lookup as in texture but with offset added to the (u,v,w) texel coordinates before looking up each texel."),
    ("texelFetch", "gvec4 texelFetch(gsamplerXD sampler, ivecX P, int lod)\nUse integer texture coordinate P to lookup a single texel from sampler."),
    ("texelFetchOffset", "gvec4 texelFetchOffset(gsamplerXD sampler, ivecX P, int lod, int offset)\nFetch a single texel as in texelFetch offset by offset."),
    ("textureProjLod", "Do a projective texture lookup with explicit LOD."),
    ("textureLodOffset", "gvec4 textureLodOffset(gsamplerXD sampler, vecX P, float lod, ivecX offset)\nDo an offset texture lookup with explicit LOD."),
    ("textureProjLodOffset", "Do an offset projective texture lookup with explicit LOD."),
    ("textureGrad", "gvec4 textureGrad(gsamplerXD sampler, vecX P, vecX dPdx, vecX dPdy)\nDo a texture lookup as in texture but with explicit gradients."),
    ("textureGradOffset", "gvec4 textureGradOffset(gsamplerXD sampler, vecX P, vecX dPdx, vecX dPdy, ivecX offset)\nDo a texture lookup with both explicit gradient and offset, as described in textureGrad and textureOffset."),
    ("textureProjGrad", "Do a texture lookup both projectively and with explicit gradient."),
    ("textureProjGradOffset", "Do a texture lookup both projectively and with explicit gradient as well as with offset."),
    ("textureGather", "gvec4 textureGather(gsampler2D sampler, vec2 P, [int comp])\nGathers four texels from a texture"),
    ("textureGatherOffset", "gvec4 textureGatherOffset(gsampler2D sampler, vec2 P, ivec2 offset, [int comp])\nGathers four texels from a texture with offset."),
    ("textureGatherOffsets", "gvec4 textureGatherOffsets(gsampler2D sampler, vec2 P, ivec2 offsets[4], [int comp])\nGathers four texels from a texture with an array of offsets."),
    ("texture1D", "1D texture lookup."),
    ("texture1DLod", "1D texture lookup with LOD."),
    ("texture1DProj", "1D texture lookup with projective divide."),
    ("texture1DProjLod", "1D texture lookup with projective divide and with LOD."),
    ("texture2D", "2D texture lookup."),
    ("texture2DLod", "2D texture lookup with LOD."),
    ("texture2DProj", "2D texture lookup with projective divide."),
    ("texture2DProjLod", "2D texture lookup with projective divide and with LOD."),
    ("texture3D", "3D texture lookup."),
    ("texture3DLod", "3D texture lookup with LOD."),
    ("texture3DProj", "3D texture lookup with projective divide."),
    ("texture3DProjLod", "3D texture lookup with projective divide and with LOD."),
    ("textureCube", "Cube texture lookup."),
    ("textureCubeLod", "Cube texture lookup with LOD."),
    ("shadow1D", "1D texture lookup."),
    ("shadow1DLod", "1D texture lookup with LOD."),
    ("shadow1DProj", "1D texture lookup with projective divide."),
    ("shadow1DProjLod", "1D texture lookup with projective divide and with LOD."),
    ("shadow2D", "2D texture lookup."),
    ("shadow2DLod", "2D texture lookup with LOD."),
    ("shadow2DProj", "2D texture lookup with projective divide."),
    ("shadow2DProjLod", "2D texture lookup with projective divide and with LOD."),
    ("dFdx", "genType dFdx(genType p)\nReturns the partial derivative of x with respect to the screen-space x-coordinate."),
    ("dFdy", "genType dFdy(genType p)\nReturns the partial derivative of x with respect to the screen-space y-coordinate."),
    ("interpolateAtCentroid", "Return the value of the input varying interpolant sampled at a location inside the both the pixel and the primitive being processed."),
    ("interpolateAtSample", "Return the value of the input varying interpolant at the location of sample number sample."),
    ("interpolateAtOffset", "Return the value of the input varying interpolant sampled at an offset from the center of the pixel specified by offset."),
    ("noise1", "Generates a random value"),
    ("noise2", "Generates a random value"),
    ("noise3", "Generates a random value"),
    ("noise4", "Generates a random value"),
    ("EmitStreamVertex", "void EmitStreamVertex(int stream)\nEmit the current values of output variables to the current output primitive on stream stream."),
    ("EndStreamPrimitive", "void EndStreamPrimitive(int stream)\nCompletes the current output primitive on stream stream and starts a new one."),
    ("EmitVertex", "void EmitVertex()\nEmit the current values to the current output primitive."),
    ("EndPrimitive", "void EndPrimitive()\nCompletes the current output primitive and starts a new one."),
    ("barrier", "void barrier()\nSynchronize execution of multiple shader invocations"),
    ("groupMemoryBarrier", "void groupMemoryBarrier()\nControls the ordering of memory transaction issued shader invocation relative to a work group"),
    ("memoryBarrier", "uint memoryBarrier()\nControls the ordering of memory transactions issued by a single shader invocation"),
    ("memoryBarrierAtomicCounter", "void memoryBarrierAtomicCounter()\nControls the ordering of operations on atomic counters issued by a single shader invocation"),
    ("memoryBarrierBuffer", "void memoryBarrierBuffer()\nControls the ordering of operations on buffer variables issued by a single shader invocation"),
    ("memoryBarrierImage", "void memoryBarrierImage()\nControls the ordering of operations on image variables issued by a single shader invocation"),
    ("memoryBarrierShared", "void memoryBarrierShared()\nControls the ordering of operations on shared variables issued by a single shader invocation"),
    ("atomicAdd", "int atomicAdd(inout int mem, int data)\nuint atomicAdd(inout uint mem, uint data)\nPerform an atomic addition to a variable"),
    ("atomicAnd", "int atomicAnd(inout int mem, int data)\nuint atomicAnd(inout uint mem, uint data)\nPerform an atomic logical AND operation to a variable"),
    ("atomicCompSwap", "int atomicCompSwap(inout int mem, uint compare, uint data)\nuint atomicCompSwap(inout uint mem, uint compare, uint data)\nPerform an atomic compare-exchange operation to a variable"),
    ("atomicCounter", "uint atomicCounter(atomic_uint c)\nReturn the current value of an atomic counter"),
    ("atomicCounterDecrement", "uint atomicCounterDecrement(atomic_uint c)\nAtomically decrement a counter and return its new value"),
    ("atomicCounterIncrement", "uint atomicCounterIncrement(atomic_uint c)\nAtomically increment a counter and return the prior value"),
    ("atomicExchange", "int atomicExchange(inout int mem, int data)\nuint atomicExchange(inout uint mem, uint data)\nPerform an atomic exchange operation to a variable "),
    ("atomicMax", "int atomicMax(inout int mem, int data)\nuint atomicMax(inout uint mem, uint data)\nPerform an atomic max operation to a variable"),
    ("atomicMin", "int atomicMin(inout int mem, int data)\nuint atomicMin(inout uint mem, uint data)\nPerform an atomic min operation to a variable "),
    ("atomicOr", "int atomicOr(inout int mem, int data)\nuint atomicOr(inout uint mem, uint data)\nPerform an atomic logical OR operation to a variable"),
    ("atomicXor", "int atomicXor(inout int mem, int data)\nuint atomicXor(inout uint mem, uint data)\nPerform an atomic logical exclusive OR operation to a variable"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_compile() {
        assert_eq!(c_family_rules().len(), C_FAMILY_RULES.len());
    }

    #[test]
    fn test_hlsl_tables() {
        let lang = LanguageDefinition::hlsl();
        assert_eq!(lang.name, "HLSL");
        assert!(lang.case_sensitive);
        assert_eq!(lang.classify_identifier("cbuffer", false), SyntaxClass::Keyword);
        assert_eq!(lang.classify_identifier("saturate", false), SyntaxClass::KnownIdentifier);
        assert_eq!(
            lang.identifier_description("abs"),
            Some("Absolute value (per component).")
        );
        assert_eq!(lang.classify_identifier("myVariable", false), SyntaxClass::Identifier);
    }

    #[test]
    fn test_glsl_tables() {
        let lang = LanguageDefinition::glsl();
        assert_eq!(lang.classify_identifier("vec3", false), SyntaxClass::Keyword);
        assert_eq!(lang.classify_identifier("Texture2D", false), SyntaxClass::Identifier);
        assert!(lang.identifiers.is_empty());
    }

    #[test]
    fn test_c_family_rule_priority() {
        let rules = c_family_rules();
        let first_match = |input: &[u8]| {
            rules
                .iter()
                .find_map(|rule| rule.match_len(input).map(|len| (len, rule.class())))
        };
        assert_eq!(first_match(b"#include <x>"), Some((8, SyntaxClass::Preprocessor)));
        assert_eq!(first_match(br#""a\"b" rest"#), Some((6, SyntaxClass::String)));
        assert_eq!(first_match(b"'x'"), Some((3, SyntaxClass::CharLiteral)));
        assert_eq!(first_match(b"1.5f;"), Some((4, SyntaxClass::Number)));
        assert_eq!(first_match(b"foo_1 = 2"), Some((5, SyntaxClass::Identifier)));
        assert_eq!(first_match(b"{"), Some((1, SyntaxClass::Punctuation)));
        assert_eq!(first_match(b" "), None);
    }
}
