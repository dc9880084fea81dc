use super::key::encode_key;

/// Returns a frequency count of the input data.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    let mut freqs = vec![0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Bytes present in `data`, most frequent first. Ties go to the lower byte value.
pub fn ranked_bytes(data: &[u8]) -> Vec<u8> {
    let freqs = freqs(data);
    let mut ranked: Vec<u8> = (0..=255_u8).filter(|&b| freqs[b as usize] > 0).collect();
    // Stable sort keeps ascending byte order among equal counts
    ranked.sort_by(|a, b| freqs[*b as usize].cmp(&freqs[*a as usize]));
    ranked
}

/// Suggest a key for data resembling `sample`: the bytes of the sample ranked by
/// frequency, base64 encoded. Frequent bytes then land in group 0.
pub fn suggest_key(sample: &[u8]) -> String {
    encode_key(&ranked_bytes(sample))
}
