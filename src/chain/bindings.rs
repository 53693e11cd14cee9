//! Minimal human-readable ABI bindings for the deployed contracts.
//!
//! Only the functions the trading flow touches are declared; the full
//! ABIs live with the contracts themselves. Each contract is bound in
//! its own module because the two routers share a surface and the
//! generated call types would otherwise collide.

mod curve_router {
    use ethers::contract::abigen;

    abigen!(
        BondingCurveRouter,
        r#"[
            function getAmountOutWithFee(address token, uint256 amountIn, bool isBuy) view returns (uint256 amountOut, uint256 fee)
            function buy(address token, uint256 amountOutMin, address to, uint256 deadline) payable returns (uint256 amountOut)
            function sell(address token, uint256 amountIn, uint256 amountOutMin, address to, uint256 deadline) returns (uint256 amountOut)
        ]"#,
    );
}

mod dex_router {
    use ethers::contract::abigen;

    abigen!(
        DexRouter,
        r#"[
            function getAmountOutWithFee(address token, uint256 amountIn, bool isBuy) view returns (uint256 amountOut, uint256 fee)
            function buy(address token, uint256 amountOutMin, address to, uint256 deadline) payable returns (uint256 amountOut)
            function sell(address token, uint256 amountIn, uint256 amountOutMin, address to, uint256 deadline) returns (uint256 amountOut)
        ]"#,
    );
}

mod curve {
    use ethers::contract::abigen;

    abigen!(
        BondingCurve,
        r#"[
            function isGraduated(address token) view returns (bool)
            function curves(address token) view returns (uint256 realReserve, uint256 virtualReserve, uint256 k, uint256 realTokenSupply, uint256 virtualTokenSupply, bool graduated)
        ]"#,
    );
}

mod lens {
    use ethers::contract::abigen;

    abigen!(
        CurveLens,
        r#"[
            function getProgress(address token) view returns (uint256 progressBps, uint256 currentMarketCap, uint256 graduationMarketCap)
        ]"#,
    );
}

mod erc20 {
    use ethers::contract::abigen;

    abigen!(
        Erc20,
        r#"[
            function balanceOf(address owner) view returns (uint256)
            function allowance(address owner, address spender) view returns (uint256)
            function approve(address spender, uint256 value) returns (bool)
        ]"#,
    );
}

pub use curve::BondingCurve;
pub use curve_router::BondingCurveRouter;
pub use dex_router::DexRouter;
pub use erc20::Erc20;
pub use lens::CurveLens;
