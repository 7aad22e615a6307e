// 8 bit
impl_restoring!(U8RestoringDivider, u8_div_rem_restoring, 8, u8, u16, i16);
impl_non_restoring!(I8NonRestoringDivider, i8_div_rem_non_restoring, 8, u8, i8, i16);

// 16 bit
impl_restoring!(U16RestoringDivider, u16_div_rem_restoring, 16, u16, u32, i32);
impl_non_restoring!(I16NonRestoringDivider, i16_div_rem_non_restoring, 16, u16, i16, i32);

// 32 bit
impl_restoring!(U32RestoringDivider, u32_div_rem_restoring, 32, u32, u64, i64);
impl_non_restoring!(I32NonRestoringDivider, i32_div_rem_non_restoring, 32, u32, i32, i64);

// 64 bit
impl_restoring!(U64RestoringDivider, u64_div_rem_restoring, 64, u64, u128, i128);
impl_non_restoring!(I64NonRestoringDivider, i64_div_rem_non_restoring, 64, u64, i64, i128);
