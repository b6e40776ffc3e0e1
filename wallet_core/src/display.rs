/// Shorten an address to its first 6 and last 4 characters.
///
/// Addresses of 10 characters or fewer are returned unchanged.
pub fn mask(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

pub fn display_address(address: &str, masked: bool) -> String {
    if masked {
        mask(address)
    } else {
        address.to_string()
    }
}
