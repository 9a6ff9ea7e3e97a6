use num::traits::WrappingAdd;


/// Copies the ``source`` bytes into the ``dest`` words. ``source`` must be at least four times bigger than ``dest``.
/// Data from ``source`` will be treated as little endian integers
pub(crate) fn words_from_le_bytes(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Copies the ``source`` bytes into the ``dest`` words. ``source`` must be at least four times bigger than ``dest``.
/// Data from ``source`` will be treated as big endian integers
pub(crate) fn words_from_be_bytes(dest: &mut [u32], source: &[u8]) {
    assert!(source.len() >= dest.len() * 4);

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Serializes ``words`` with every word in little endian byte order.
pub(crate) fn words_to_le_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_le_bytes()).collect()
}

/// Serializes ``words`` with every word in big endian byte order.
pub(crate) fn words_to_be_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|word| word.to_be_bytes()).collect()
}

/// Adds ``working`` element-wise into ``state`` modulo the word size. This is how the working variables of a
/// compression round are folded back into the hash state.
pub(crate) fn wrapping_add_assign<W>(state: &mut [W], working: &[W])
    where W: WrappingAdd {
    assert_eq!(state.len(), working.len());

    for (accumulated, addend) in state.iter_mut().zip(working.iter()) {
        *accumulated = accumulated.wrapping_add(addend);
    }
}
