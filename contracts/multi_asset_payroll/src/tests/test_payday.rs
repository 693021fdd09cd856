use soroban_sdk::{testutils::Address as _, vec, Address, Env, Vec};

use super::*;
use crate::errors::PayrollError;
use crate::settlement::{ensure_covered, plan_payday};
use crate::storage::Employee;

#[test]
fn test_payday_single_asset_at_unit_rate() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    set_time(&ctx.env, THIRTY_ONE_DAYS);
    let legs = ctx.client.payday(&employee);

    assert_eq!(legs.len(), 1);
    let leg = legs.get(0).unwrap();
    assert_eq!(leg.asset, ctx.base);
    assert_eq!(leg.percentage, 100);
    assert_eq!(leg.base_share, MONTHLY_SALARY);
    assert_eq!(leg.amount, MONTHLY_SALARY);

    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
    assert_eq!(ctx.treasury_balance(&ctx.base), 80_000);
    assert_eq!(
        ctx.client.get_employee(&id).unwrap().last_payday,
        THIRTY_ONE_DAYS
    );
}

#[test]
fn test_payday_right_after_hire_is_too_early() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::TooEarly))
    );
}

#[test]
fn test_payday_requires_strictly_more_than_interval() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    set_time(&ctx.env, THIRTY_DAYS);
    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::TooEarly))
    );

    set_time(&ctx.env, THIRTY_DAYS + 1);
    ctx.client.payday(&employee);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
}

#[test]
fn test_second_payday_within_interval_moves_nothing() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    set_time(&ctx.env, THIRTY_ONE_DAYS);
    ctx.client.payday(&employee);

    advance(&ctx.env, ONE_DAY);
    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::TooEarly))
    );
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
    assert_eq!(ctx.treasury_balance(&ctx.base), 80_000);
    assert_eq!(
        ctx.client.get_employee(&id).unwrap().last_payday,
        THIRTY_ONE_DAYS
    );

    set_time(&ctx.env, THIRTY_ONE_DAYS + THIRTY_DAYS + 1);
    ctx.client.payday(&employee);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 2 * MONTHLY_SALARY);
}

#[test]
fn test_long_wait_still_pays_one_month() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    set_time(&ctx.env, 90 * ONE_DAY);
    ctx.client.payday(&employee);

    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
}

#[test]
fn test_payday_without_allocation_fails() {
    let ctx = setup();
    let (employee, _) = ctx.hire_unallocated(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::NoAllocation))
    );
}

#[test]
fn test_missing_rate_rejects_whole_settlement() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    let usdc = create_token(&ctx.env);
    ctx.client.determine_allocation(
        &employee,
        &vec![&ctx.env, ctx.base.clone(), usdc.clone()],
        &vec![&ctx.env, 50u32, 50u32],
    );
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    ctx.fund(&usdc, 100_000);
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::RateUnavailable))
    );
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 0);
    assert_eq!(balance(&ctx.env, &usdc, &employee), 0);
    assert_eq!(ctx.client.get_employee(&id).unwrap().last_payday, 0);
}

#[test]
fn test_underfunded_leg_rejects_whole_settlement() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    let usdc = create_token(&ctx.env);
    ctx.client.determine_allocation(
        &employee,
        &vec![&ctx.env, ctx.base.clone(), usdc.clone()],
        &vec![&ctx.env, 50u32, 50u32],
    );
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.set_rate(&usdc, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    ctx.fund(&usdc, 9_999);
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::InsufficientFunds))
    );
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 0);
    assert_eq!(ctx.treasury_balance(&ctx.base), 100_000);
    assert_eq!(ctx.treasury_balance(&usdc), 9_999);
    assert_eq!(ctx.client.get_employee(&id).unwrap().last_payday, 0);

    ctx.fund(&usdc, 1);
    ctx.client.payday(&employee);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 10_000);
    assert_eq!(balance(&ctx.env, &usdc, &employee), 10_000);
}

#[test]
fn test_payday_converts_each_leg_at_its_rate() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    let usdc = create_token(&ctx.env);
    ctx.client.determine_allocation(
        &employee,
        &vec![&ctx.env, usdc.clone(), ctx.base.clone()],
        &vec![&ctx.env, 60u32, 40u32],
    );
    // one usdc is worth two base units
    ctx.set_rate(&usdc, 2 * UNIT_RATE);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    ctx.fund(&usdc, 100_000);
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    let legs = ctx.client.payday(&employee);

    assert_eq!(legs.get(0).unwrap().asset, usdc);
    assert_eq!(legs.get(0).unwrap().base_share, 12_000);
    assert_eq!(legs.get(0).unwrap().amount, 6_000);
    assert_eq!(legs.get(1).unwrap().amount, 8_000);
    assert_eq!(balance(&ctx.env, &usdc, &employee), 6_000);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 8_000);
}

#[test]
fn test_rounding_loss_is_bounded_by_leg_count() {
    let ctx = setup();
    let (employee, _) = ctx.hire(200_000);
    let usdc = create_token(&ctx.env);
    let eurc = create_token(&ctx.env);
    ctx.client.determine_allocation(
        &employee,
        &vec![&ctx.env, usdc.clone(), eurc.clone(), ctx.base.clone()],
        &vec![&ctx.env, 33u32, 33u32, 34u32],
    );
    for asset in [&usdc, &eurc, &ctx.base] {
        ctx.set_rate(asset, UNIT_RATE);
        ctx.fund(asset, 100_000);
    }
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    let legs = ctx.client.payday(&employee);

    let disbursed: i128 = legs.iter().map(|leg| leg.base_share).sum();
    assert_eq!(disbursed, 5_499 + 5_499 + 5_666);
    assert!(16_666 - disbursed <= 2);
}

#[test]
fn test_zero_share_leg_transfers_nothing() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    let usdc = create_token(&ctx.env);
    ctx.client.determine_allocation(
        &employee,
        &vec![&ctx.env, usdc.clone(), ctx.base.clone()],
        &vec![&ctx.env, 0u32, 100u32],
    );
    ctx.set_rate(&usdc, UNIT_RATE);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    set_time(&ctx.env, THIRTY_ONE_DAYS);

    let legs = ctx.client.payday(&employee);

    assert_eq!(legs.get(0).unwrap().amount, 0);
    assert_eq!(balance(&ctx.env, &usdc, &employee), 0);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
}

#[test]
fn test_payday_uses_current_salary() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    ctx.client.set_employee_salary(&ctx.owner, &id, &120_000);
    set_time(&ctx.env, THIRTY_ONE_DAYS);
    ctx.client.payday(&employee);

    assert_eq!(balance(&ctx.env, &ctx.base, &employee), 10_000);
}

#[test]
fn test_payday_unknown_or_removed_employee() {
    let ctx = setup();
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    let stranger = Address::generate(&ctx.env);

    assert_eq!(
        ctx.client.try_payday(&stranger),
        Err(Ok(PayrollError::NotFound))
    );

    let (employee, id) = ctx.hire(YEARLY_SALARY);
    ctx.client.remove_employee(&ctx.owner, &id);
    set_time(&ctx.env, THIRTY_ONE_DAYS);
    assert_eq!(
        ctx.client.try_payday(&employee),
        Err(Ok(PayrollError::NotFound))
    );
    assert_eq!(ctx.treasury_balance(&ctx.base), 100_000);
}

#[test]
fn test_next_payday_tracks_reference() {
    let ctx = setup();
    let (employee, id) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);

    assert_eq!(ctx.client.next_payday(&id), THIRTY_DAYS + 1);

    set_time(&ctx.env, THIRTY_ONE_DAYS);
    ctx.client.payday(&employee);
    assert_eq!(ctx.client.next_payday(&id), THIRTY_ONE_DAYS + THIRTY_DAYS + 1);

    assert_eq!(ctx.client.try_next_payday(&42), Err(Ok(PayrollError::NotFound)));
}

#[test]
fn test_owner_tunes_pay_interval() {
    let ctx = setup();
    let (employee, _) = ctx.hire(YEARLY_SALARY);
    ctx.set_rate(&ctx.base, UNIT_RATE);
    ctx.fund(&ctx.base, 100_000);
    let week = 7 * ONE_DAY;

    assert_eq!(
        ctx.client.try_set_pay_interval(&employee, &week),
        Err(Ok(PayrollError::Unauthorized))
    );
    assert_eq!(
        ctx.client.try_set_pay_interval(&ctx.owner, &0),
        Err(Ok(PayrollError::InvalidAmount))
    );

    ctx.client.set_pay_interval(&ctx.owner, &week);
    assert_eq!(ctx.client.pay_interval(), week);

    set_time(&ctx.env, week + 1);
    ctx.client.payday(&employee);
    assert_eq!(balance(&ctx.env, &ctx.base, &employee), MONTHLY_SALARY);
}

#[test]
fn test_plan_reports_rounding_shortfall() {
    let env = Env::default();
    let mut tokens = Vec::new(&env);
    for _ in 0..3 {
        tokens.push_back(Address::generate(&env));
    }
    let employee = Employee {
        id: 1,
        address: Address::generate(&env),
        yearly_salary: 200_000,
        monthly_salary: 16_666,
        hired_at: 0,
        last_payday: 0,
        allocated_tokens: tokens,
        allocated_percentages: vec![&env, 33u32, 33u32, 34u32],
    };

    let plan = plan_payday(&env, &employee, THIRTY_ONE_DAYS, THIRTY_DAYS, |_| UNIT_RATE).unwrap();

    assert_eq!(plan.gross, 16_666);
    assert_eq!(plan.disbursed_base(), 16_664);
    assert_eq!(plan.paid_at, THIRTY_ONE_DAYS);
    assert_eq!(
        ensure_covered(&plan, |_| 5_500),
        Err(PayrollError::InsufficientFunds)
    );
    assert_eq!(ensure_covered(&plan, |_| 5_666), Ok(()));
}
