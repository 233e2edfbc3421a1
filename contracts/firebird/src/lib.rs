#![cfg_attr(not(feature = "std"), no_std, no_main)]

/// # Firebird (FBRD)
///
/// Fee-on-transfer token with an oracle-driven burn.
///
/// ```text
///   wallet ──transfer──► wallet          no tax
///   pair   ──transfer──► wallet (BUY)    tax_bps → contract
///   wallet ──transfer──► pair   (SELL)   tax_bps → contract
///
///   contract balance > fee_dispersion_threshold
///       └── swap via router → native → marketing wallet
///
///   request_tweet_count ──► oracle ──► fulfill(count)
///       burn_amount = min(count, 100 000) × tweet_burn_multiplier
/// ```
///
/// Collaborators (router, pair, oracle token) are optional. Without a router
/// the accumulated tax is forwarded to the marketing wallet as tokens; without
/// a pair every transfer is untaxed.
pub mod constants {
    pub const TOKEN_NAME: &str = "Firebird";
    pub const TOKEN_SYMBOL: &str = "FBRD";
    pub const TOKEN_DECIMALS: u8 = 18;
    pub const SCALING_FACTOR: u128 = 1_000_000_000_000_000_000u128;

    pub const BPS_DENOMINATOR: u128 = 10_000;
    /// 3% on buys and sells through the pair.
    pub const DEFAULT_TAX_BPS: u128 = 300;
    pub const MAX_TAX_BPS: u128 = BPS_DENOMINATOR;

    pub const DEFAULT_FEE_DISPERSION_THRESHOLD: u128 = 100_000 * SCALING_FACTOR;

    /// Tweet counts reported by the oracle are capped here before scaling.
    pub const MAX_TWEET_COUNT: u128 = 100_000;
    pub const DEFAULT_TWEET_BURN_MULTIPLIER: u128 = 1;

    /// Router swap deadline, relative to the current block timestamp.
    pub const SWAP_DEADLINE_MS: u64 = 300_000;

    pub const ZERO_ADDRESS: [u8; 32] = [0u8; 32];

    /// Burn sink: 0x000…dEaD, right-aligned in a 32-byte account.
    pub const DEAD_ADDRESS: [u8; 32] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0xdE, 0xaD,
    ];
}

#[ink::contract]
mod firebird {
    use crate::constants::*;
    use ink::env::call::{build_call, ExecutionInput, Selector};
    use ink::env::hash::Blake2x256;
    use ink::env::{CallFlags, DefaultEnvironment};
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;

    pub type JobId = [u8; 32];
    pub type RequestId = [u8; 32];

    /// An oracle request waiting for its `fulfill` callback.
    #[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(
        feature = "std",
        derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
    )]
    pub struct PendingRequest {
        pub job_id: JobId,
        pub param: u64,
        pub requested_at: Timestamp,
    }

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct Firebird {
        // ── Ledger ────────────────────────────────────────────────────────
        total_supply: Balance,
        balances: Mapping<AccountId, Balance>,
        allowances: Mapping<(AccountId, AccountId), Balance>,
        excluded_from_fee: Mapping<AccountId, bool>,

        // ── Access control ────────────────────────────────────────────────
        owner: AccountId,

        // ── Tax & dispersion ──────────────────────────────────────────────
        tax_bps: u128,
        marketing_wallet: AccountId,
        fee_dispersion_threshold: Balance,
        router: Option<AccountId>,
        uniswap_v2_pair: Option<AccountId>,

        // ── Oracle ────────────────────────────────────────────────────────
        /// Account allowed to open tweet-count requests besides the owner.
        oracle_wallet: AccountId,
        /// Operator that answers requests through `fulfill`.
        oracle: AccountId,
        oracle_token: Option<AccountId>,
        job_id: JobId,
        oracle_fee: Balance,
        request_nonce: u64,
        pending_requests: Mapping<RequestId, PendingRequest>,
        tweet_burn_multiplier: u128,
        last_tweet_count: u128,
        last_burn_amount: Balance,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    #[ink(event)]
    pub struct Transfer {
        #[ink(topic)]
        from: Option<AccountId>,
        #[ink(topic)]
        to: Option<AccountId>,
        value: Balance,
    }

    #[ink(event)]
    pub struct Approval {
        #[ink(topic)]
        owner: AccountId,
        #[ink(topic)]
        spender: AccountId,
        value: Balance,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(event)]
    pub struct MarketingWalletUpdated {
        #[ink(topic)]
        wallet: AccountId,
    }

    #[ink(event)]
    pub struct OracleWalletUpdated {
        #[ink(topic)]
        wallet: AccountId,
    }

    #[ink(event)]
    pub struct FeeDispersionThresholdUpdated {
        previous: Balance,
        updated: Balance,
    }

    #[ink(event)]
    pub struct TweetBurnMultiplierUpdated {
        previous: u128,
        updated: u128,
    }

    #[ink(event)]
    pub struct TaxRateUpdated {
        previous: u128,
        updated: u128,
    }

    #[ink(event)]
    pub struct ExcludedFromFee {
        #[ink(topic)]
        account: AccountId,
        excluded: bool,
    }

    #[ink(event)]
    pub struct RouterUpdated {
        router: Option<AccountId>,
    }

    #[ink(event)]
    pub struct UniswapPairUpdated {
        pair: Option<AccountId>,
    }

    #[ink(event)]
    pub struct OracleConfigUpdated {
        #[ink(topic)]
        oracle: AccountId,
        job_id: JobId,
        fee: Balance,
        token: Option<AccountId>,
    }

    /// `swapped` is false when the tokens went to `recipient` unswapped
    /// because no router is configured.
    #[ink(event)]
    pub struct FeesDispersed {
        tokens: Balance,
        #[ink(topic)]
        recipient: AccountId,
        swapped: bool,
    }

    #[ink(event)]
    pub struct OracleRequested {
        #[ink(topic)]
        request_id: RequestId,
        job_id: JobId,
        param: u64,
        oracle: AccountId,
        payment: Balance,
    }

    #[ink(event)]
    pub struct OracleFulfilled {
        #[ink(topic)]
        request_id: RequestId,
        tweet_count: u128,
        burn_amount: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Recipient is the zero address.
        InvalidRecipient,
        /// Amount is zero.
        InvalidAmount,
        /// Spender is the zero address.
        InvalidSpender,
        InsufficientBalance,
        InsufficientAllowance,
        /// Caller is not the contract owner.
        NotOwner,
        /// Proposed owner is the zero address.
        InvalidOwner,
        /// Caller may not open oracle requests.
        Unauthorized,
        /// Job id does not match the configured oracle job.
        InvalidJobId,
        /// Caller is not the oracle operator.
        NotOracle,
        /// No pending request carries this id.
        UnknownRequest,
        InvalidTaxRate,
        /// Contract holds no accumulated fees.
        NothingToDisperse,
        RouterNotConfigured,
        /// Router call for the fee swap failed.
        SwapFailed,
        /// Factory call for the pair failed.
        PairCreationFailed,
        /// Oracle token refused the fee payment.
        OraclePaymentFailed,
        Overflow,
    }

    impl Error {
        /// Revert string of the equivalent EVM contract.
        pub fn reason(&self) -> &'static str {
            match self {
                Error::InvalidRecipient => "ERC20: transfer to the zero address",
                Error::InvalidAmount => "ERC20: Transfer amount must be greater than zero",
                Error::InvalidSpender => "ERC20: approve to the zero address",
                Error::InsufficientBalance => "ERC20: transfer amount exceeds balance",
                Error::InsufficientAllowance => "ERC20: insufficient allowance",
                Error::NotOwner => "Ownable: caller is not the owner",
                Error::InvalidOwner => "Ownable: new owner is the zero address",
                Error::Unauthorized => "Firebird: caller cannot request oracle data",
                Error::InvalidJobId => "Firebird: unknown oracle job",
                Error::NotOracle => "Source must be the oracle of the request",
                Error::UnknownRequest => "Firebird: unknown oracle request",
                Error::InvalidTaxRate => "Firebird: tax rate exceeds 100%",
                Error::NothingToDisperse => "Firebird: no fees to disperse",
                Error::RouterNotConfigured => "Firebird: router not configured",
                Error::SwapFailed => "Firebird: fee swap failed",
                Error::PairCreationFailed => "Firebird: pair creation failed",
                Error::OraclePaymentFailed => "Firebird: oracle payment failed",
                Error::Overflow => "Firebird: arithmetic overflow",
            }
        }
    }

    // =========================================================================
    // CROSS-CONTRACT INTERFACES
    // =========================================================================

    /// Minimal interface to the AMM router.
    #[ink::trait_definition]
    pub trait AmmRouter {
        #[ink(message)]
        fn factory(&self) -> AccountId;

        /// Wrapped native currency token.
        #[ink(message)]
        fn weth(&self) -> AccountId;

        /// Pulls `amount_in` of `path[0]` from the caller and pays native
        /// currency to `to`.
        #[ink(message)]
        fn swap_exact_tokens_for_native_supporting_fee_on_transfer_tokens(
            &mut self,
            amount_in: Balance,
            amount_out_min: Balance,
            path: Vec<AccountId>,
            to: AccountId,
            deadline: u64,
        );
    }

    #[ink::trait_definition]
    pub trait AmmFactory {
        #[ink(message)]
        fn create_pair(&mut self, token_a: AccountId, token_b: AccountId) -> AccountId;
    }

    /// ERC-677 style token used to pay the oracle operator.
    #[ink::trait_definition]
    pub trait OracleToken {
        #[ink(message)]
        fn transfer_and_call(&mut self, to: AccountId, value: Balance, data: Vec<u8>) -> bool;
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl Firebird {
        /// Deploy the token.
        ///
        /// Mints `initial_supply` whole tokens (scaled by 10^18) to the
        /// deployer. The deployer, the contract and the marketing wallet start
        /// out exempt from fees.
        #[ink(constructor)]
        pub fn new(
            initial_supply: Balance,
            marketing_wallet: AccountId,
            oracle_wallet: AccountId,
            router: Option<AccountId>,
            oracle_token: Option<AccountId>,
            oracle: AccountId,
            job_id: JobId,
            oracle_fee: Balance,
        ) -> Result<Self, Error> {
            let caller = Self::env().caller();
            let this = Self::env().account_id();
            let minted = initial_supply
                .checked_mul(SCALING_FACTOR)
                .ok_or(Error::Overflow)?;

            let mut balances = Mapping::default();
            balances.insert(caller, &minted);

            let mut excluded_from_fee = Mapping::default();
            excluded_from_fee.insert(caller, &true);
            excluded_from_fee.insert(this, &true);
            excluded_from_fee.insert(marketing_wallet, &true);

            Self::env().emit_event(Transfer {
                from: None,
                to: Some(caller),
                value: minted,
            });

            Ok(Self {
                total_supply: minted,
                balances,
                allowances: Mapping::default(),
                excluded_from_fee,
                owner: caller,
                tax_bps: DEFAULT_TAX_BPS,
                marketing_wallet,
                fee_dispersion_threshold: DEFAULT_FEE_DISPERSION_THRESHOLD,
                router,
                uniswap_v2_pair: None,
                oracle_wallet,
                oracle,
                oracle_token,
                job_id,
                oracle_fee,
                request_nonce: 0,
                pending_requests: Mapping::default(),
                tweet_burn_multiplier: DEFAULT_TWEET_BURN_MULTIPLIER,
                last_tweet_count: 0,
                last_burn_amount: 0,
            })
        }

        // =====================================================================
        // ERC-20
        // =====================================================================

        #[ink(message)]
        pub fn name(&self) -> String {
            String::from(TOKEN_NAME)
        }

        #[ink(message)]
        pub fn symbol(&self) -> String {
            String::from(TOKEN_SYMBOL)
        }

        #[ink(message)]
        pub fn decimals(&self) -> u8 {
            TOKEN_DECIMALS
        }

        #[ink(message)]
        pub fn total_supply(&self) -> Balance {
            self.total_supply
        }

        #[ink(message)]
        pub fn balance_of(&self, account: AccountId) -> Balance {
            self.balances.get(account).unwrap_or(0)
        }

        #[ink(message)]
        pub fn allowance(&self, owner: AccountId, spender: AccountId) -> Balance {
            self.allowances.get((owner, spender)).unwrap_or(0)
        }

        #[ink(message)]
        pub fn approve(&mut self, spender: AccountId, value: Balance) -> Result<(), Error> {
            if spender == AccountId::from(ZERO_ADDRESS) {
                return Err(Error::InvalidSpender);
            }
            let owner = self.env().caller();
            self.allowances.insert((owner, spender), &value);
            self.env().emit_event(Approval {
                owner,
                spender,
                value,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer(&mut self, to: AccountId, value: Balance) -> Result<(), Error> {
            let from = self.env().caller();
            self.process_transfer(from, to, value)
        }

        #[ink(message)]
        pub fn transfer_from(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            let caller = self.env().caller();
            let allowance = self.allowance(from, caller);
            if allowance < value {
                return Err(Error::InsufficientAllowance);
            }

            self.process_transfer(from, to, value)?;
            self.allowances.insert((from, caller), &(allowance - value));
            Ok(())
        }

        // =====================================================================
        // TAXED TRANSFER
        // =====================================================================

        /// Move `value` from `from` to `to`, withholding the tax on buys and
        /// sells through the registered pair.
        ///
        /// ```text
        /// tax = value × tax_bps / 10_000     (buy or sell, neither party exempt)
        /// tax = 0                            (otherwise)
        /// to       += value − tax
        /// contract += tax
        /// ```
        ///
        /// Accumulated fees are dispersed first when they exceed the threshold.
        fn process_transfer(
            &mut self,
            from: AccountId,
            to: AccountId,
            value: Balance,
        ) -> Result<(), Error> {
            if to == AccountId::from(ZERO_ADDRESS) {
                return Err(Error::InvalidRecipient);
            }
            if value == 0 {
                return Err(Error::InvalidAmount);
            }
            if self.balance_of(from) < value {
                return Err(Error::InsufficientBalance);
            }

            if self.should_disperse(from, self.env().caller()) {
                self.disperse_accumulated_fees()?;
            }

            let tax = self.tax_for(from, to, value);
            let net_value = value - tax;

            self.debit_balance(from, value)?;
            self.credit_balance(to, net_value)?;
            self.env().emit_event(Transfer {
                from: Some(from),
                to: Some(to),
                value: net_value,
            });

            if tax > 0 {
                let this = self.env().account_id();
                self.credit_balance(this, tax)?;
                self.env().emit_event(Transfer {
                    from: Some(from),
                    to: Some(this),
                    value: tax,
                });
            }

            Ok(())
        }

        fn tax_for(&self, from: AccountId, to: AccountId, value: Balance) -> Balance {
            let Some(pair) = self.uniswap_v2_pair else {
                return 0;
            };
            let is_buy = from == pair;
            let is_sell = to == pair;
            if !is_buy && !is_sell {
                return 0;
            }
            if self.is_excluded_from_fee(from) || self.is_excluded_from_fee(to) {
                return 0;
            }
            bps_of(value, self.tax_bps)
        }

        // =====================================================================
        // FEE DISPERSION
        // =====================================================================

        /// Never inside a buy (the pair is mid-swap), never on the
        /// contract's own outgoing transfer (the router pulling the fees) and
        /// never when the router itself is the caller: it is already on the
        /// call stack and would refuse the swap as a re-entry.
        fn should_disperse(&self, from: AccountId, caller: AccountId) -> bool {
            let this = self.env().account_id();
            if from == this || Some(from) == self.uniswap_v2_pair {
                return false;
            }
            if Some(caller) == self.router {
                return false;
            }
            self.balance_of(this) > self.fee_dispersion_threshold
        }

        /// Swap the contract's whole token balance for native currency paid to
        /// the marketing wallet. Without a router the tokens are forwarded
        /// unswapped.
        fn disperse_accumulated_fees(&mut self) -> Result<Balance, Error> {
            let this = self.env().account_id();
            let amount = self.balance_of(this);
            if amount == 0 {
                return Err(Error::NothingToDisperse);
            }
            let recipient = self.marketing_wallet;

            let swapped = match self.router {
                Some(router) => {
                    self.swap_tokens_for_native(router, amount, recipient)?;
                    true
                }
                None => {
                    self.debit_balance(this, amount)?;
                    self.credit_balance(recipient, amount)?;
                    self.env().emit_event(Transfer {
                        from: Some(this),
                        to: Some(recipient),
                        value: amount,
                    });
                    false
                }
            };

            self.env().emit_event(FeesDispersed {
                tokens: amount,
                recipient,
                swapped,
            });
            Ok(amount)
        }

        /// The router re-enters `transfer_from` to pull the tokens. That path
        /// has `from == contract`, which is fee-exempt and skips dispersion.
        fn swap_tokens_for_native(
            &mut self,
            router: AccountId,
            amount: Balance,
            to: AccountId,
        ) -> Result<(), Error> {
            let this = self.env().account_id();
            let wrapped_native = self.router_weth(router).ok_or(Error::SwapFailed)?;

            self.allowances.insert((this, router), &amount);
            self.env().emit_event(Approval {
                owner: this,
                spender: router,
                value: amount,
            });

            let deadline = self.env().block_timestamp().saturating_add(SWAP_DEADLINE_MS);
            let path: Vec<AccountId> = ink::prelude::vec![this, wrapped_native];

            let result = build_call::<DefaultEnvironment>()
                .call(router)
                .call_flags(CallFlags::ALLOW_REENTRY)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!(
                        "swap_exact_tokens_for_native_supporting_fee_on_transfer_tokens"
                    )))
                    .push_arg(amount)
                    .push_arg(0u128)
                    .push_arg(path)
                    .push_arg(to)
                    .push_arg(deadline),
                )
                .returns::<()>()
                .try_invoke();

            match result {
                Ok(Ok(())) => Ok(()),
                _ => Err(Error::SwapFailed),
            }
        }

        fn router_weth(&self, router: AccountId) -> Option<AccountId> {
            let result = build_call::<DefaultEnvironment>()
                .call(router)
                .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "weth"
                ))))
                .returns::<AccountId>()
                .try_invoke();

            match result {
                Ok(Ok(weth)) => Some(weth),
                _ => None,
            }
        }

        /// Disperse the accumulated fees now, regardless of the threshold.
        #[ink(message)]
        pub fn disperse_fees(&mut self) -> Result<Balance, Error> {
            self.only_owner()?;
            self.disperse_accumulated_fees()
        }

        // =====================================================================
        // ORACLE-DRIVEN BURN
        // =====================================================================

        /// Open a tweet-count request with the oracle operator.
        ///
        /// **Caller:** owner or oracle wallet. `job_id` must match the
        /// configured job. The fee is paid in the oracle token when one is
        /// configured and the fee is non-zero.
        ///
        /// The request id is derived from the current nonce and the fee is
        /// paid first; the nonce and the pending entry are written only once
        /// the payment went through, so a refused payment leaves no trace.
        #[ink(message)]
        pub fn request_tweet_count(&mut self, job_id: JobId, param: u64) -> Result<RequestId, Error> {
            let caller = self.env().caller();
            if caller != self.owner && caller != self.oracle_wallet {
                return Err(Error::Unauthorized);
            }
            if job_id != self.job_id {
                return Err(Error::InvalidJobId);
            }

            let nonce = self.request_nonce;
            let next_nonce = nonce.checked_add(1).ok_or(Error::Overflow)?;
            let request_id = self
                .env()
                .hash_encoded::<Blake2x256, _>(&(self.env().account_id(), nonce));

            let payment = match self.oracle_token {
                Some(token) if self.oracle_fee > 0 => {
                    self.pay_oracle(token, request_id, param)?;
                    self.oracle_fee
                }
                _ => 0,
            };

            self.request_nonce = next_nonce;
            self.pending_requests.insert(
                request_id,
                &PendingRequest {
                    job_id,
                    param,
                    requested_at: self.env().block_timestamp(),
                },
            );

            self.env().emit_event(OracleRequested {
                request_id,
                job_id,
                param,
                oracle: self.oracle,
                payment,
            });

            Ok(request_id)
        }

        fn pay_oracle(&self, token: AccountId, request_id: RequestId, param: u64) -> Result<(), Error> {
            let data = oracle_payload(request_id, param);

            let result = build_call::<DefaultEnvironment>()
                .call(token)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("transfer_and_call")))
                        .push_arg(self.oracle)
                        .push_arg(self.oracle_fee)
                        .push_arg(data),
                )
                .returns::<bool>()
                .try_invoke();

            match result {
                Ok(Ok(true)) => Ok(()),
                _ => Err(Error::OraclePaymentFailed),
            }
        }

        /// Oracle callback. Consumes the pending request and records
        /// `min(tweet_count, MAX_TWEET_COUNT) × tweet_burn_multiplier` as the
        /// burn amount, in whole tokens.
        ///
        /// # Errors
        /// - [`Error::NotOracle`]      — caller is not the oracle operator.
        /// - [`Error::UnknownRequest`] — unknown or already fulfilled id.
        #[ink(message)]
        pub fn fulfill(&mut self, request_id: RequestId, tweet_count: u128) -> Result<Balance, Error> {
            if self.env().caller() != self.oracle {
                return Err(Error::NotOracle);
            }
            if !self.pending_requests.contains(request_id) {
                return Err(Error::UnknownRequest);
            }

            let burn_amount = tweet_count
                .min(MAX_TWEET_COUNT)
                .checked_mul(self.tweet_burn_multiplier)
                .ok_or(Error::Overflow)?;

            self.pending_requests.remove(request_id);
            self.last_tweet_count = tweet_count;
            self.last_burn_amount = burn_amount;

            self.env().emit_event(OracleFulfilled {
                request_id,
                tweet_count,
                burn_amount,
            });

            Ok(burn_amount)
        }

        /// Destroy `amount` whole tokens from the caller.
        ///
        /// Supply shrinks by `amount × 10^18`; the burn is reported as a
        /// transfer to `DEAD_ADDRESS`, which is not credited.
        #[ink(message)]
        pub fn burn(&mut self, amount: Balance) -> Result<(), Error> {
            if amount == 0 {
                return Err(Error::InvalidAmount);
            }
            let caller = self.env().caller();
            let value = amount.checked_mul(SCALING_FACTOR).ok_or(Error::Overflow)?;

            self.debit_balance(caller, value)?;
            self.total_supply = self
                .total_supply
                .checked_sub(value)
                .ok_or(Error::Overflow)?;

            self.env().emit_event(Transfer {
                from: Some(caller),
                to: Some(AccountId::from(DEAD_ADDRESS)),
                value,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn pending_request(&self, request_id: RequestId) -> Option<PendingRequest> {
            self.pending_requests.get(request_id)
        }

        #[ink(message)]
        pub fn last_tweet_count(&self) -> u128 {
            self.last_tweet_count
        }

        #[ink(message)]
        pub fn last_burn_amount(&self) -> Balance {
            self.last_burn_amount
        }

        // =====================================================================
        // VIEW FUNCTIONS
        // =====================================================================

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.owner
        }

        #[ink(message)]
        pub fn is_excluded_from_fee(&self, account: AccountId) -> bool {
            self.excluded_from_fee.get(account).unwrap_or(false)
        }

        #[ink(message)]
        pub fn marketing_wallet(&self) -> AccountId {
            self.marketing_wallet
        }

        #[ink(message)]
        pub fn oracle_wallet(&self) -> AccountId {
            self.oracle_wallet
        }

        #[ink(message)]
        pub fn fee_dispersion_threshold(&self) -> Balance {
            self.fee_dispersion_threshold
        }

        #[ink(message)]
        pub fn tweet_burn_multiplier(&self) -> u128 {
            self.tweet_burn_multiplier
        }

        /// Tax on buys and sells, in basis points.
        #[ink(message)]
        pub fn tax_rate(&self) -> u128 {
            self.tax_bps
        }

        #[ink(message)]
        pub fn uniswap_v2_pair(&self) -> Option<AccountId> {
            self.uniswap_v2_pair
        }

        #[ink(message)]
        pub fn router(&self) -> Option<AccountId> {
            self.router
        }

        #[ink(message)]
        pub fn oracle(&self) -> AccountId {
            self.oracle
        }

        #[ink(message)]
        pub fn oracle_token(&self) -> Option<AccountId> {
            self.oracle_token
        }

        #[ink(message)]
        pub fn job_id(&self) -> JobId {
            self.job_id
        }

        #[ink(message)]
        pub fn oracle_fee(&self) -> Balance {
            self.oracle_fee
        }

        // =====================================================================
        // ADMIN
        // =====================================================================

        /// Change the marketing wallet. The new wallet is exempted from fees.
        #[ink(message)]
        pub fn update_wallet_marketing(&mut self, wallet: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            self.marketing_wallet = wallet;
            self.excluded_from_fee.insert(wallet, &true);
            self.env().emit_event(MarketingWalletUpdated { wallet });
            Ok(())
        }

        #[ink(message)]
        pub fn update_wallet_oracle(&mut self, wallet: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            self.oracle_wallet = wallet;
            self.env().emit_event(OracleWalletUpdated { wallet });
            Ok(())
        }

        #[ink(message)]
        pub fn update_fee_dispersion_threshold(&mut self, threshold: Balance) -> Result<(), Error> {
            self.only_owner()?;
            let previous = self.fee_dispersion_threshold;
            self.fee_dispersion_threshold = threshold;
            self.env().emit_event(FeeDispersionThresholdUpdated {
                previous,
                updated: threshold,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn update_tweet_burn_multiplier(&mut self, multiplier: u128) -> Result<(), Error> {
            self.only_owner()?;
            let previous = self.tweet_burn_multiplier;
            self.tweet_burn_multiplier = multiplier;
            self.env().emit_event(TweetBurnMultiplierUpdated {
                previous,
                updated: multiplier,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn update_tax_rate(&mut self, tax_bps: u128) -> Result<(), Error> {
            self.only_owner()?;
            if tax_bps > MAX_TAX_BPS {
                return Err(Error::InvalidTaxRate);
            }
            let previous = self.tax_bps;
            self.tax_bps = tax_bps;
            self.env().emit_event(TaxRateUpdated {
                previous,
                updated: tax_bps,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn set_excluded_from_fee(&mut self, account: AccountId, excluded: bool) -> Result<(), Error> {
            self.only_owner()?;
            self.excluded_from_fee.insert(account, &excluded);
            self.env().emit_event(ExcludedFromFee { account, excluded });
            Ok(())
        }

        #[ink(message)]
        pub fn update_oracle_config(
            &mut self,
            oracle: AccountId,
            job_id: JobId,
            fee: Balance,
        ) -> Result<(), Error> {
            self.only_owner()?;
            self.oracle = oracle;
            self.job_id = job_id;
            self.oracle_fee = fee;
            self.emit_oracle_config();
            Ok(())
        }

        #[ink(message)]
        pub fn set_oracle_token(&mut self, token: Option<AccountId>) -> Result<(), Error> {
            self.only_owner()?;
            self.oracle_token = token;
            self.emit_oracle_config();
            Ok(())
        }

        fn emit_oracle_config(&self) {
            self.env().emit_event(OracleConfigUpdated {
                oracle: self.oracle,
                job_id: self.job_id,
                fee: self.oracle_fee,
                token: self.oracle_token,
            });
        }

        #[ink(message)]
        pub fn set_router(&mut self, router: Option<AccountId>) -> Result<(), Error> {
            self.only_owner()?;
            self.router = router;
            self.env().emit_event(RouterUpdated { router });
            Ok(())
        }

        /// Register the AMM pair that buys and sells are routed through.
        #[ink(message)]
        pub fn set_uniswap_pair(&mut self, pair: Option<AccountId>) -> Result<(), Error> {
            self.only_owner()?;
            self.uniswap_v2_pair = pair;
            self.env().emit_event(UniswapPairUpdated { pair });
            Ok(())
        }

        /// Ask the router's factory for a FBRD / wrapped-native pair and
        /// register it.
        ///
        /// # Errors
        /// - [`Error::RouterNotConfigured`] — no router set.
        /// - [`Error::PairCreationFailed`]  — a router or factory call failed.
        #[ink(message)]
        pub fn create_uniswap_pair(&mut self) -> Result<AccountId, Error> {
            self.only_owner()?;
            let router = self.router.ok_or(Error::RouterNotConfigured)?;

            let factory = build_call::<DefaultEnvironment>()
                .call(router)
                .exec_input(ExecutionInput::new(Selector::new(ink::selector_bytes!(
                    "factory"
                ))))
                .returns::<AccountId>()
                .try_invoke();
            let factory = match factory {
                Ok(Ok(factory)) => factory,
                _ => return Err(Error::PairCreationFailed),
            };
            let wrapped_native = self.router_weth(router).ok_or(Error::PairCreationFailed)?;

            let pair = build_call::<DefaultEnvironment>()
                .call(factory)
                .exec_input(
                    ExecutionInput::new(Selector::new(ink::selector_bytes!("create_pair")))
                        .push_arg(self.env().account_id())
                        .push_arg(wrapped_native),
                )
                .returns::<AccountId>()
                .try_invoke();
            let pair = match pair {
                Ok(Ok(pair)) => pair,
                _ => return Err(Error::PairCreationFailed),
            };

            self.uniswap_v2_pair = Some(pair);
            self.env().emit_event(UniswapPairUpdated { pair: Some(pair) });
            Ok(pair)
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.only_owner()?;
            if new_owner == AccountId::from(ZERO_ADDRESS) {
                return Err(Error::InvalidOwner);
            }
            self.set_owner(new_owner);
            Ok(())
        }

        /// Leave the contract without an owner. Every setter is disabled
        /// afterwards.
        #[ink(message)]
        pub fn renounce_ownership(&mut self) -> Result<(), Error> {
            self.only_owner()?;
            self.set_owner(AccountId::from(ZERO_ADDRESS));
            Ok(())
        }

        // =====================================================================
        // INTERNAL HELPERS
        // =====================================================================

        fn set_owner(&mut self, new_owner: AccountId) {
            let previous_owner = self.owner;
            self.owner = new_owner;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
        }

        fn only_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::NotOwner);
            }
            Ok(())
        }

        fn debit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            if balance < amount {
                return Err(Error::InsufficientBalance);
            }
            self.balances.insert(account, &(balance - amount));
            Ok(())
        }

        fn credit_balance(&mut self, account: AccountId, amount: Balance) -> Result<(), Error> {
            let balance = self.balance_of(account);
            let new_balance = balance.checked_add(amount).ok_or(Error::Overflow)?;
            self.balances.insert(account, &new_balance);
            Ok(())
        }
    }

    /// `value × bps / 10_000`, floored, without overflowing for any `value`
    /// while `bps <= BPS_DENOMINATOR`.
    fn bps_of(value: Balance, bps: u128) -> Balance {
        value / BPS_DENOMINATOR * bps + value % BPS_DENOMINATOR * bps / BPS_DENOMINATOR
    }

    /// Data forwarded with the oracle fee: SCALE-encoded `(request_id, param)`.
    fn oracle_payload(request_id: RequestId, param: u64) -> Vec<u8> {
        scale::Encode::encode(&(request_id, param))
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
