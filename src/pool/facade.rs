//! The constant-product pool: state, settlement and the public operations.
//!
//! Every state-changing operation runs the same sequence while holding the
//! pool lock:
//!
//! 1. validate arguments
//! 2. pre-check the pull on the ledger
//! 3. compute the new reserves and supply on a copy
//! 4. pull from the caller
//! 5. commit the copy
//! 6. push to the caller
//! 7. record the event
//!
//! A failure before step 4 changes nothing.  A failed second pull in
//! [`Pool::add_liquidity`] refunds the first.  A failed push rolls the
//! commit back and is reported as [`AmmError::LedgerInconsistency`].
//!
//! [`Pool::remove_liquidity`] pushes two assets.  If the first lands and
//! the second does not, the commit cannot be undone: the books keep the
//! burn and the asset0 debit, and the pool halts.  A halted pool rejects
//! every further deposit, withdrawal and swap.

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use super::liquidity::{compute_mint, compute_redeem};
use super::reserve_store::{ReserveDelta, ReserveStore};
use super::share_book::ShareBook;
use super::swap::{quote_exact_in, spot_price};
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Direction, FeeTier, Liquidity, LiquidityAdded,
    LiquidityRemoved, PoolEvent, Reserves, SwapReceipt, Swapped,
};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

#[derive(Debug, Default)]
struct PoolState {
    store: ReserveStore,
    shares: ShareBook,
    events: Vec<PoolEvent>,
    halted: bool,
}

/// Logs a rejected operation and hands the error back.
fn rejected(operation: &'static str, err: AmmError) -> AmmError {
    if err.is_fatal() {
        error!(operation, error = %err, "pool operation failed");
    } else {
        warn!(operation, error = %err, "pool operation rejected");
    }
    err
}

/// A constant-product liquidity pool over two assets of an
/// [`AssetLedger`].
///
/// Reserves, share balances, total supply and the event log sit behind a
/// single [`parking_lot::Mutex`], held for the full operation including the
/// ledger calls, so operations are serialized and observers never see a
/// half-applied one.  Share a pool between threads with `Arc<Pool<L>>`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use cpmm_pool::config::PoolConfig;
/// use cpmm_pool::domain::{AccountId, Amount, AssetId, FeeTier, Reserves};
/// use cpmm_pool::ledger::InMemoryLedger;
/// use cpmm_pool::pool::Pool;
///
/// let (a, b) = (AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]));
/// let custody = AccountId::from_bytes([0xee; 32]);
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let ledger = Arc::new(InMemoryLedger::new());
/// for asset in [a, b] {
///     ledger.mint(&asset, &alice, Amount::new(2_000)).expect("mint");
///     ledger.approve(&asset, &alice, &custody, Amount::new(2_000));
/// }
///
/// let config = PoolConfig::new(a, b, custody, FeeTier::ZERO).expect("config");
/// let pool = Pool::new(config, Arc::clone(&ledger)).expect("pool");
///
/// pool.add_liquidity(&alice, Amount::new(1_000), Amount::new(1_000)).expect("deposit");
/// let receipt = pool.swap(&alice, &a, Amount::new(500)).expect("swap");
///
/// assert_eq!(receipt.amount_out(), Amount::new(333));
/// assert_eq!(pool.reserves(), Reserves::from((1_500, 667)));
/// ```
#[derive(Debug)]
pub struct Pool<L> {
    pair: AssetPair,
    account: AccountId,
    fee_tier: FeeTier,
    ledger: L,
    state: Mutex<PoolState>,
}

impl<L: AssetLedger> Pool<L> {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if both assets are the same.
    /// - [`AmmError::InvalidFee`] if the fee is 100% or more.
    pub fn new(config: PoolConfig, ledger: L) -> Result<Self, AmmError> {
        config.validate()?;
        let pair = config.asset_pair()?;
        info!(
            asset0 = %pair.asset0(),
            asset1 = %pair.asset1(),
            account = %config.account(),
            fee = %config.fee_tier(),
            "pool created"
        );
        Ok(Self {
            pair,
            account: config.account(),
            fee_tier: config.fee_tier(),
            ledger,
            state: Mutex::new(PoolState::default()),
        })
    }

    // -- queries ------------------------------------------------------------

    /// First asset, as configured.
    #[must_use]
    pub const fn asset0(&self) -> AssetId {
        self.pair.asset0()
    }

    /// Second asset, as configured.
    #[must_use]
    pub const fn asset1(&self) -> AssetId {
        self.pair.asset1()
    }

    /// Both assets in pool order.
    #[must_use]
    pub const fn assets(&self) -> AssetPair {
        self.pair
    }

    /// Swap fee.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Account that holds the pool's funds on the ledger.
    #[must_use]
    pub const fn account(&self) -> AccountId {
        self.account
    }

    /// The ledger the pool settles against.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Current reserves, in pool order.
    pub fn reserves(&self) -> Reserves {
        self.state.lock().store.reserves()
    }

    /// Shares outstanding.
    pub fn total_supply(&self) -> Liquidity {
        self.state.lock().store.total_supply()
    }

    /// Shares held by `provider`; zero for unknown accounts.
    pub fn liquidity_balance(&self, provider: &AccountId) -> Liquidity {
        self.state.lock().shares.balance_of(provider)
    }

    /// Every event recorded since creation or the last
    /// [`drain_events`](Self::drain_events), oldest first.
    pub fn events(&self) -> Vec<PoolEvent> {
        self.state.lock().events.clone()
    }

    /// Takes the event log, leaving it empty.
    pub fn drain_events(&self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.state.lock().events)
    }

    /// `true` once a withdrawal has been only partly paid out.  Every
    /// state-changing operation then fails with
    /// [`AmmError::LedgerInconsistency`].
    pub fn is_halted(&self) -> bool {
        self.state.lock().halted
    }

    /// Price of `base` as `(quote_reserve, base_reserve)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `base` is not in the pool.
    pub fn spot_price(&self, base: &AssetId) -> Result<(Amount, Amount), AmmError> {
        let reserves = self.reserves();
        spot_price(&self.pair, reserves, base)
    }

    // -- dry runs -----------------------------------------------------------

    /// Prices a swap against the current reserves without executing it.
    ///
    /// # Errors
    ///
    /// The same pricing errors as [`swap`](Self::swap).  Ledger conditions
    /// are not checked.
    pub fn quote_swap(
        &self,
        token_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        let reserves = self.reserves();
        let receipt = quote_exact_in(&self.pair, reserves, self.fee_tier, token_in, amount_in)?;
        debug!(
            token_in = %token_in,
            amount_in = %amount_in,
            amount_out = %receipt.amount_out(),
            fee = %receipt.fee(),
            "swap quoted"
        );
        Ok(receipt)
    }

    /// Amounts `shares` would redeem for right now.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientBalance`] if `shares` exceeds the supply.
    /// - [`AmmError::ZeroOutput`] if both amounts round to zero.
    pub fn quote_remove_liquidity(
        &self,
        shares: Liquidity,
    ) -> Result<(Amount, Amount), AmmError> {
        let state = self.state.lock();
        compute_redeem(shares, state.store.reserves(), state.store.total_supply())
    }

    // -- operations ---------------------------------------------------------

    fn admit(&self, state: &PoolState, caller: &AccountId) -> Result<(), AmmError> {
        if state.halted {
            return Err(AmmError::LedgerInconsistency("pool halted after a partial payout"));
        }
        if *caller == self.account {
            return Err(AmmError::CustodyCaller);
        }
        Ok(())
    }

    /// Deposits `amount0` of asset0 and `amount1` of asset1 from `provider`
    /// and credits them with newly minted shares.
    ///
    /// Both amounts are pulled in full.  When they are not in the pool's
    /// current ratio, the surplus on one side accrues to existing holders.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if `provider` is the pool's account.
    /// - [`AmmError::ZeroAmount`] if either amount is zero.
    /// - [`AmmError::ZeroLiquidityMinted`] if the deposit earns no shares.
    /// - [`AmmError::AllowanceInsufficient`] or [`AmmError::TransferFailed`]
    ///   if either pull would fail.  Nothing has moved.
    /// - [`AmmError::LedgerInconsistency`] if the second pull failed and the
    ///   first could not be refunded.
    pub fn add_liquidity(
        &self,
        provider: &AccountId,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<LiquidityAdded, AmmError> {
        let mut state = self.state.lock();
        self.try_add_liquidity(&mut state, provider, amount0, amount1)
            .map_err(|e| rejected("add_liquidity", e))
    }

    fn try_add_liquidity(
        &self,
        state: &mut PoolState,
        provider: &AccountId,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<LiquidityAdded, AmmError> {
        self.admit(state, provider)?;
        let supply = state.store.total_supply();
        let minted = compute_mint(amount0, amount1, state.store.reserves(), supply)?;

        let mut next = state.store;
        next.apply_delta(ReserveDelta::Credit(amount0), ReserveDelta::Credit(amount1))?;
        next.set_supply(supply.safe_add(&minted)?);
        debug!(
            provider = %provider,
            amount0 = %amount0,
            amount1 = %amount1,
            minted = %minted,
            "deposit priced"
        );

        let (asset0, asset1) = (self.pair.asset0(), self.pair.asset1());
        self.ledger
            .can_transfer_from(&asset0, provider, &self.account, amount0)?;
        self.ledger
            .can_transfer_from(&asset1, provider, &self.account, amount1)?;

        self.ledger
            .transfer_from(&asset0, provider, &self.account, amount0)?;
        if let Err(err) = self
            .ledger
            .transfer_from(&asset1, provider, &self.account, amount1)
        {
            warn!(provider = %provider, amount0 = %amount0, error = %err, "refunding asset0");
            let refund = self.ledger.transfer(&asset0, &self.account, provider, amount0);
            if let Err(refund_err) = refund {
                error!(provider = %provider, error = %refund_err, "asset0 refund failed");
                return Err(AmmError::LedgerInconsistency("asset0 refund failed"));
            }
            return Err(err);
        }

        state.store = next;
        state.shares.mint(provider, minted)?;

        let event = LiquidityAdded {
            provider: *provider,
            amount0,
            amount1,
            minted,
        };
        state.events.push(event.into());
        info!(
            provider = %provider,
            amount0 = %amount0,
            amount1 = %amount1,
            minted = %minted,
            "liquidity added"
        );
        Ok(event)
    }

    /// Burns `shares` held by `provider` and pays out their pro-rata part
    /// of both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if `provider` is the pool's account.
    /// - [`AmmError::ZeroAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientBalance`] if `provider` holds fewer shares.
    /// - [`AmmError::ZeroOutput`] if both payouts round to zero.
    /// - [`AmmError::LedgerInconsistency`] if a payout could not be pushed.
    ///   When asset0 was paid and asset1 was not, the pool records the
    ///   asset0 payout, keeps the shares burned and halts.
    pub fn remove_liquidity(
        &self,
        provider: &AccountId,
        shares: Liquidity,
    ) -> Result<LiquidityRemoved, AmmError> {
        let mut state = self.state.lock();
        self.try_remove_liquidity(&mut state, provider, shares)
            .map_err(|e| rejected("remove_liquidity", e))
    }

    fn try_remove_liquidity(
        &self,
        state: &mut PoolState,
        provider: &AccountId,
        shares: Liquidity,
    ) -> Result<LiquidityRemoved, AmmError> {
        self.admit(state, provider)?;
        if shares.is_zero() {
            return Err(AmmError::ZeroAmount("shares"));
        }
        let available = state.shares.balance_of(provider);
        if available < shares {
            return Err(AmmError::InsufficientBalance {
                requested: shares,
                available,
            });
        }

        let supply = state.store.total_supply();
        let (amount0, amount1) = compute_redeem(shares, state.store.reserves(), supply)?;
        debug!(
            provider = %provider,
            shares = %shares,
            amount0 = %amount0,
            amount1 = %amount1,
            "withdrawal priced"
        );

        let (asset0, asset1) = (self.pair.asset0(), self.pair.asset1());
        if self.ledger.balance_of(&asset0, &self.account) < amount0
            || self.ledger.balance_of(&asset1, &self.account) < amount1
        {
            return Err(AmmError::LedgerInconsistency("custody below reserves"));
        }

        let before = state.store;
        let mut next = before;
        next.apply_delta(ReserveDelta::Debit(amount0), ReserveDelta::Debit(amount1))?;
        next.set_supply(supply.safe_sub(&shares)?);

        state.shares.burn(provider, shares)?;
        state.store = next;

        if let Err(err) = self.ledger.transfer(&asset0, &self.account, provider, amount0) {
            state.store = before;
            state.shares.mint(provider, shares)?;
            error!(
                provider = %provider,
                shares = %shares,
                error = %err,
                "payout failed, rolled back"
            );
            return Err(AmmError::LedgerInconsistency("payout to provider failed"));
        }
        if let Err(err) = self.ledger.transfer(&asset1, &self.account, provider, amount1) {
            // asset0 has left custody; record exactly that much.
            state.halted = true;
            let mut settled = before;
            settled.apply_delta(ReserveDelta::Debit(amount0), ReserveDelta::Unchanged)?;
            settled.set_supply(supply.safe_sub(&shares)?);
            state.store = settled;
            state.events.push(
                LiquidityRemoved {
                    provider: *provider,
                    amount0,
                    amount1: Amount::ZERO,
                }
                .into(),
            );
            error!(
                provider = %provider,
                shares = %shares,
                paid0 = %amount0,
                unpaid1 = %amount1,
                error = %err,
                "asset1 payout failed after asset0 was paid, pool halted"
            );
            return Err(AmmError::LedgerInconsistency("asset1 payout to provider failed"));
        }

        let event = LiquidityRemoved {
            provider: *provider,
            amount0,
            amount1,
        };
        state.events.push(event.into());
        info!(
            provider = %provider,
            shares = %shares,
            amount0 = %amount0,
            amount1 = %amount1,
            "liquidity removed"
        );
        Ok(event)
    }

    /// Sells `amount_in` of `token_in` from `trader` for the other asset.
    ///
    /// # Errors
    ///
    /// - [`AmmError::CustodyCaller`] if `trader` is the pool's account.
    /// - [`AmmError::InvalidToken`] if `token_in` is not in the pool.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::AllowanceInsufficient`] or [`AmmError::TransferFailed`]
    ///   if the pull would fail.
    /// - [`AmmError::InsufficientOutput`] if the trade pays nothing or would
    ///   empty the output reserve.
    /// - [`AmmError::LedgerInconsistency`] if the output could not be pushed.
    pub fn swap(
        &self,
        trader: &AccountId,
        token_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        let mut state = self.state.lock();
        self.try_swap(&mut state, trader, token_in, amount_in)
            .map_err(|e| rejected("swap", e))
    }

    fn try_swap(
        &self,
        state: &mut PoolState,
        trader: &AccountId,
        token_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapReceipt, AmmError> {
        self.admit(state, trader)?;
        let direction = self.pair.direction(token_in)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in"));
        }
        self.ledger
            .can_transfer_from(token_in, trader, &self.account, amount_in)?;

        let receipt = quote_exact_in(
            &self.pair,
            state.store.reserves(),
            self.fee_tier,
            token_in,
            amount_in,
        )?;
        let amount_out = receipt.amount_out();
        debug!(
            trader = %trader,
            amount_in = %amount_in,
            amount_out = %amount_out,
            fee = %receipt.fee(),
            "swap priced"
        );

        let (delta0, delta1) = match direction {
            Direction::ZeroForOne => (
                ReserveDelta::Credit(amount_in),
                ReserveDelta::Debit(amount_out),
            ),
            Direction::OneForZero => (
                ReserveDelta::Debit(amount_out),
                ReserveDelta::Credit(amount_in),
            ),
        };
        let before = state.store;
        let mut next = before;
        next.apply_delta(delta0, delta1)?;
        if next.product() < before.product() {
            return Err(AmmError::ReserveUnderflow);
        }

        self.ledger
            .transfer_from(token_in, trader, &self.account, amount_in)?;
        state.store = next;

        let token_out = receipt.token_out();
        let pushed = self
            .ledger
            .transfer(&token_out, &self.account, trader, amount_out);
        if let Err(err) = pushed {
            state.store = before;
            error!(trader = %trader, amount_out = %amount_out, error = %err, "swap payout failed");
            let refund = self.ledger.transfer(token_in, &self.account, trader, amount_in);
            if let Err(refund_err) = refund {
                error!(trader = %trader, error = %refund_err, "swap input refund failed");
            }
            return Err(AmmError::LedgerInconsistency("swap payout failed"));
        }

        state.events.push(
            Swapped {
                trader: *trader,
                token_in: *token_in,
                amount_in,
                amount_out,
            }
            .into(),
        );
        info!(
            trader = %trader,
            token_in = %token_in,
            amount_in = %amount_in,
            amount_out = %amount_out,
            "swap executed"
        );
        Ok(receipt)
    }

    // -- consistency --------------------------------------------------------

    /// Verifies that total supply equals the sum of share balances and that
    /// the custody account holds at least the recorded reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ReserveUnderflow`] on any mismatch.
    pub fn check_invariants(&self) -> Result<(), AmmError> {
        let state = self.state.lock();
        let supply = state.store.total_supply();
        if state.shares.sum() != Some(supply) {
            error!(supply = %supply, "share balances do not sum to supply");
            return Err(AmmError::ReserveUnderflow);
        }
        let reserves = state.store.reserves();
        let custody0 = self.ledger.balance_of(&self.pair.asset0(), &self.account);
        let custody1 = self.ledger.balance_of(&self.pair.asset1(), &self.account);
        if custody0 < reserves.reserve0 || custody1 < reserves.reserve1 {
            error!(
                reserves = %reserves,
                custody0 = %custody0,
                custody1 = %custody1,
                "custody below reserves"
            );
            return Err(AmmError::ReserveUnderflow);
        }
        Ok(())
    }
}
