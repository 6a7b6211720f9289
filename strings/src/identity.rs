/// True when both slices denote the same storage: same starting address
/// and same length. Contents are never compared.
///
/// Repeated occurrences of one literal usually satisfy this because rustc
/// folds identical literals into a single static allocation; that is
/// compiler behavior, not a language guarantee. Two live heap-allocated
/// `String`s never share storage, however equal their text.
pub fn same_storage(a: &str, b: &str) -> bool {
    std::ptr::eq(a, b)
}
