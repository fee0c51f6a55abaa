//! Turning whatever a user pasted into a [`SteamId`].
//!
//! Accepted inputs, tried in this order:
//!
//! 1. a 17-digit SteamID64
//! 2. an 8 to 10 digit account ID
//! 3. `STEAM_X:Y:Z` or `[U:1:N]`
//! 4. a profile URL containing `/profiles/<SteamID64>`
//! 5. a custom URL containing `/id/<name>`, resolved through the Steam Web API
//!
//! Anything else is rejected with [`ResolveError::UnrecognizedFormat`].

use {
	crate::steam,
	regex::Regex,
	std::sync::LazyLock,
	steam_id::{STEAM_ID64_DIGITS, SteamId},
};

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"/profiles/(\d{17})\b").expect("profile URL regex must compile")
});

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static VANITY_URL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"/id/([^/?#\s]+)").expect("vanity URL regex must compile"));

/// Lengths of a 32-bit account ID written out in decimal.
const ACCOUNT_ID_DIGITS: std::ops::RangeInclusive<usize> = 8..=10;

#[derive(Debug, Display, Error)]
pub enum ResolveError
{
	#[display("input does not look like a Steam profile")]
	UnrecognizedFormat,

	#[display("custom URLs cannot be resolved without a Steam API key")]
	NoCredential,

	#[display("no Steam profile uses the custom URL `{name}`")]
	VanityNotFound
	{
		name: String,
	},

	#[display("failed to resolve custom URL")]
	VanityLookup(steam::ApiError),
}

/// Something that can resolve the custom part of a `steamcommunity.com/id/…` URL.
pub trait ResolveVanity
{
	fn resolve_vanity(
		&self,
		vanity_name: &str,
	) -> impl Future<Output = steam::Result<Option<SteamId>>> + Send;
}

impl ResolveVanity for steam::Client
{
	async fn resolve_vanity(&self, vanity_name: &str) -> steam::Result<Option<SteamId>>
	{
		steam::resolve_vanity_url(self, vanity_name).await
	}
}

/// Resolves `input` into a [`SteamId`].
///
/// `vanity_resolver` is only consulted for custom URLs; if it is [`None`] those fail with
/// [`ResolveError::NoCredential`] without any request being made.
#[tracing::instrument(skip(vanity_resolver), ret(level = "debug"), err(level = "debug"))]
pub async fn resolve<V>(input: &str, vanity_resolver: Option<&V>) -> Result<SteamId, ResolveError>
where
	V: ResolveVanity,
{
	let input = input.trim();

	if let Some(steam_id) = parse_static(input) {
		return Ok(steam_id);
	}

	let Some(vanity_name) = VANITY_URL
		.captures(input)
		.and_then(|captures| captures.get(1))
		.map(|name| name.as_str())
	else {
		return Err(ResolveError::UnrecognizedFormat);
	};

	let vanity_resolver = vanity_resolver.ok_or(ResolveError::NoCredential)?;

	match vanity_resolver.resolve_vanity(vanity_name).await {
		Ok(Some(steam_id)) => Ok(steam_id),
		Ok(None) => Err(ResolveError::VanityNotFound { name: vanity_name.to_owned() }),
		Err(error) => Err(ResolveError::VanityLookup(error)),
	}
}

/// Everything that can be resolved without asking Steam.
fn parse_static(input: &str) -> Option<SteamId>
{
	if !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit()) {
		let value = input.parse::<u64>().ok()?;

		return match input.len() {
			STEAM_ID64_DIGITS => Some(SteamId::from_u64(value)),
			len if ACCOUNT_ID_DIGITS.contains(&len) => SteamId::from_account_id(value),
			_ => None,
		};
	}

	if input.starts_with("STEAM_") {
		return SteamId::parse_id2(input).ok();
	}

	if input.starts_with("[U:") || input.starts_with("U:") {
		return SteamId::parse_id3(input).ok();
	}

	PROFILE_URL
		.captures(input)
		.and_then(|captures| captures.get(1))
		.and_then(|digits| digits.as_str().parse::<u64>().ok())
		.map(SteamId::from_u64)
}

#[cfg(test)]
mod tests
{
	use {
		super::*,
		std::sync::atomic::{AtomicUsize, Ordering},
	};

	/// Knows exactly one custom URL.
	#[derive(Debug, Default)]
	struct FakeSteam
	{
		calls: AtomicUsize,
	}

	const KNOWN_NAME: &str = "foo";
	const UNREACHABLE_NAME: &str = "timeout";
	const KNOWN_ID: SteamId = SteamId::from_u64(76561198012345678_u64);

	impl ResolveVanity for FakeSteam
	{
		async fn resolve_vanity(&self, vanity_name: &str) -> steam::Result<Option<SteamId>>
		{
			self.calls.fetch_add(1, Ordering::SeqCst);

			if vanity_name == UNREACHABLE_NAME {
				return Err(steam::ApiError::Timeout);
			}

			Ok((vanity_name == KNOWN_NAME).then_some(KNOWN_ID))
		}
	}

	async fn resolve_offline(input: &str) -> Result<SteamId, ResolveError>
	{
		resolve::<FakeSteam>(input, None).await
	}

	#[tokio::test]
	async fn steam_id64_is_returned_as_is()
	{
		for input in ["76561198012345678", "76561197960265728", "12345678901234567"] {
			let resolved = resolve_offline(input).await;

			assert!(matches!(resolved, Ok(id) if id.to_string() == input), "{input}: {resolved:?}");
		}
	}

	#[tokio::test]
	async fn account_ids_are_offset()
	{
		for account_id in [12345678_u64, 52079950, 322356345, 4294967295, 9999999999] {
			let resolved = resolve_offline(&account_id.to_string()).await;

			assert!(
				matches!(resolved, Ok(id) if id.as_u64() == account_id + 76561197960265728_u64),
				"{account_id}: {resolved:?}",
			);
		}
	}

	#[tokio::test]
	async fn input_is_trimmed()
	{
		assert!(matches!(resolve_offline("  76561198012345678\n").await, Ok(KNOWN_ID)));
	}

	#[tokio::test]
	async fn other_digit_counts_are_rejected()
	{
		for input in ["1234567", "12345678901", "1234567890123456", "123456789012345678"] {
			assert!(
				matches!(resolve_offline(input).await, Err(ResolveError::UnrecognizedFormat)),
				"{input}",
			);
		}
	}

	#[tokio::test]
	async fn steam2_and_steam3_ids()
	{
		assert!(matches!(
			resolve_offline("STEAM_1:1:161178172").await,
			Ok(id) if id.as_u64() == 76561198282622073_u64
		));

		assert!(matches!(
			resolve_offline("[U:1:322356345]").await,
			Ok(id) if id.as_u64() == 76561198282622073_u64
		));
	}

	#[tokio::test]
	async fn profile_urls()
	{
		for input in [
			"https://x/profiles/76561198012345678",
			"https://steamcommunity.com/profiles/76561198012345678/",
			"steamcommunity.com/profiles/76561198012345678?l=english",
		] {
			assert!(matches!(resolve_offline(input).await, Ok(KNOWN_ID)), "{input}");
		}
	}

	#[tokio::test]
	async fn garbage_is_rejected()
	{
		for input in ["not a steam thing", "", "   ", "https://steamcommunity.com/"] {
			assert!(
				matches!(resolve_offline(input).await, Err(ResolveError::UnrecognizedFormat)),
				"{input:?}",
			);
		}
	}

	#[tokio::test]
	async fn vanity_url_without_credential()
	{
		let resolved = resolve_offline("https://steamcommunity.com/id/foo").await;

		assert!(matches!(resolved, Err(ResolveError::NoCredential)));
	}

	#[tokio::test]
	async fn vanity_url_hit()
	{
		let steam = FakeSteam::default();
		let resolved = resolve("https://steamcommunity.com/id/foo/", Some(&steam)).await;

		assert!(matches!(resolved, Ok(KNOWN_ID)));
		assert_eq!(steam.calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn vanity_url_miss()
	{
		let steam = FakeSteam::default();
		let resolved = resolve("https://steamcommunity.com/id/bar", Some(&steam)).await;

		assert!(matches!(resolved, Err(ResolveError::VanityNotFound { name }) if name == "bar"));
	}

	#[tokio::test]
	async fn vanity_lookup_failure_is_not_a_miss()
	{
		let steam = FakeSteam::default();
		let resolved = resolve("https://steamcommunity.com/id/timeout", Some(&steam)).await;

		assert!(matches!(resolved, Err(ResolveError::VanityLookup(steam::ApiError::Timeout))));
	}

	#[tokio::test]
	async fn profile_urls_need_a_full_steam_id()
	{
		for input in [
			"https://steamcommunity.com/profiles/123",
			"https://steamcommunity.com/profiles/765611980123456789",
		] {
			assert!(
				matches!(resolve_offline(input).await, Err(ResolveError::UnrecognizedFormat)),
				"{input}",
			);
		}
	}

	#[tokio::test]
	async fn numeric_inputs_never_hit_steam()
	{
		let steam = FakeSteam::default();

		assert!(resolve("76561198012345678", Some(&steam)).await.is_ok());
		assert!(resolve("https://x/profiles/76561198012345678", Some(&steam)).await.is_ok());
		assert_eq!(steam.calls.load(Ordering::SeqCst), 0);
	}
}
